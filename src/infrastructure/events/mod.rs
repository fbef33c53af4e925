//! Event Sink Implementations
//!
//! Concrete implementations of the IntakeEventSink port.

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::{event_to_json, JsonEventSink};
