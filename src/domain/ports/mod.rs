//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod resolve_events;

pub use command_runner::{CommandError, CommandRunner, PackageManagerCommand};
pub use resolve_events::{NoopEventSink, ResolveEvent, ResolveEventSink};
