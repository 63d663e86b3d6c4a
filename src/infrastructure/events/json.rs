//! JSON Event Sink
//!
//! Outputs resolve events as NDJSON for CI/automation consumption.

use crate::domain::ports::{ResolveEvent, ResolveEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON form of an event, shared with the CLI's final report.
pub fn event_to_json(event: &ResolveEvent) -> serde_json::Value {
    match event {
        ResolveEvent::Started {
            root_module,
            dependency_root,
        } => serde_json::json!({
            "event": "start",
            "command": "resolve",
            "root_module": root_module,
            "dependency_root": dependency_root.display().to_string(),
        }),

        ResolveEvent::CommandStarted { command } => serde_json::json!({
            "event": "command_start",
            "command": "resolve",
            "run": command.to_string(),
        }),

        ResolveEvent::CommandFinished {
            command,
            elapsed,
            output_bytes,
        } => serde_json::json!({
            "event": "command_finished",
            "command": "resolve",
            "run": command.to_string(),
            "elapsed_ms": elapsed.as_millis() as u64,
            "output_bytes": output_bytes,
        }),

        ResolveEvent::TreeParsed { node_count } => serde_json::json!({
            "event": "tree_parsed",
            "command": "resolve",
            "node_count": node_count,
        }),

        ResolveEvent::ModuleStoreResolved { path, from_config } => serde_json::json!({
            "event": "module_store",
            "command": "resolve",
            "path": path.display().to_string(),
            "source": if *from_config { "config" } else { "default" },
        }),

        ResolveEvent::GraphBuilt { module_count } => serde_json::json!({
            "event": "graph_built",
            "command": "resolve",
            "module_count": module_count,
        }),

        ResolveEvent::DependencyExcluded { parent, module } => serde_json::json!({
            "event": "excluded",
            "command": "resolve",
            "parent": parent,
            "module": module,
        }),

        ResolveEvent::ClosureResolved { module_count } => serde_json::json!({
            "event": "closure_resolved",
            "command": "resolve",
            "module_count": module_count,
        }),

        ResolveEvent::PathsResolved { package_count } => serde_json::json!({
            "event": "paths_resolved",
            "command": "resolve",
            "package_count": package_count,
        }),

        ResolveEvent::Completed {
            package_count,
            excluded_count,
        } => serde_json::json!({
            "event": "complete",
            "command": "resolve",
            "status": "success",
            "packages": package_count,
            "excluded": excluded_count,
        }),
    }
}

impl ResolveEventSink for JsonEventSink {
    fn on_event(&self, event: ResolveEvent) {
        self.write_event(event_to_json(&event));
    }
}
