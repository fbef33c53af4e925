//! Domain Layer
//!
//! Pure intake logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Staged files and the intake session state machine
//! - `value_objects/` - Manifest, content hash, upload date
//! - `services/` - Reconciliation engine
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
