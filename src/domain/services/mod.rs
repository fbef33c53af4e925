//! Domain Services
//!
//! Stateless logic over domain entities.

pub mod reconciler;

pub use reconciler::{derive_status, reconcile, Reconciliation};
