//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `package_manager/` - Process runner and output parsing for the package manager
//! - `events/` - Event sinks (console, NDJSON)

pub mod events;
pub mod package_manager;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use package_manager::ProcessRunner;
