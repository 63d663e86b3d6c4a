//! Resolve Event Port
//!
//! Observable interface for the resolution pipeline. This is the crate's
//! logging surface: progress, diagnostics and timings flow through here.

use std::path::PathBuf;
use std::time::Duration;

use super::command_runner::PackageManagerCommand;

/// Event emitted during a resolution
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveEvent {
    /// Resolution started
    Started {
        root_module: String,
        dependency_root: PathBuf,
    },

    /// A package-manager command was launched
    CommandStarted { command: PackageManagerCommand },

    /// A package-manager command returned successfully
    CommandFinished {
        command: PackageManagerCommand,
        elapsed: Duration,
        output_bytes: usize,
    },

    /// Dependency report parsed
    TreeParsed { node_count: usize },

    /// Module store located
    ModuleStoreResolved { path: PathBuf, from_config: bool },

    /// Dependency graph rebuilt
    GraphBuilt { module_count: usize },

    /// A dependency was left out by the exclusion policy
    DependencyExcluded { parent: String, module: String },

    /// Closure computed
    ClosureResolved { module_count: usize },

    /// Closure mapped to module store paths
    PathsResolved { package_count: usize },

    /// Resolution completed
    Completed {
        package_count: usize,
        excluded_count: usize,
    },
}

/// Trait for receiving resolve events
///
/// Implementations:
/// - ConsoleEventSink: progress on stderr
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait ResolveEventSink: Send + Sync {
    fn on_event(&self, event: ResolveEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ResolveEventSink for NoopEventSink {
    fn on_event(&self, _event: ResolveEvent) {}
}
