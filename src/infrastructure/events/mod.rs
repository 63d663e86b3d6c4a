//! Event Sink Implementations
//!
//! Provides concrete implementations of ResolveEventSink:
//! - ConsoleEventSink: Human-readable progress on stderr
//! - JsonEventSink: NDJSON output for CI/automation

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::{event_to_json, JsonEventSink};
