//! Console Event Sink
//!
//! Human-readable progress on stderr. Stdout stays reserved for the
//! resolved path list so it can be piped.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::config::Verbosity;
use crate::domain::ports::{ResolveEvent, ResolveEventSink};

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbosity: Verbosity,
    unicode: bool,
}

impl ConsoleEventSink {
    /// Write to stderr; emoji markers only when stderr is a terminal.
    pub fn stderr(verbosity: Verbosity) -> Self {
        use is_terminal::IsTerminal;

        let unicode = io::stderr().is_terminal();
        Self::with_writer(io::stderr(), verbosity, unicode)
    }

    pub fn with_writer<W: Write + Send + 'static>(
        writer: W,
        verbosity: Verbosity,
        unicode: bool,
    ) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbosity,
            unicode,
        }
    }

    fn marker(&self, fancy: &'static str, plain: &'static str) -> &'static str {
        if self.unicode {
            fancy
        } else {
            plain
        }
    }

    fn required_verbosity(event: &ResolveEvent) -> Verbosity {
        match event {
            ResolveEvent::Started { .. }
            | ResolveEvent::ModuleStoreResolved { .. }
            | ResolveEvent::Completed { .. } => Verbosity::Normal,
            ResolveEvent::CommandFinished { .. }
            | ResolveEvent::DependencyExcluded { .. }
            | ResolveEvent::ClosureResolved { .. } => Verbosity::Verbose,
            ResolveEvent::CommandStarted { .. }
            | ResolveEvent::TreeParsed { .. }
            | ResolveEvent::GraphBuilt { .. }
            | ResolveEvent::PathsResolved { .. } => Verbosity::Debug,
        }
    }

    fn render(&self, event: &ResolveEvent) -> String {
        match event {
            ResolveEvent::Started {
                root_module,
                dependency_root,
            } => format!(
                "{} Get dependencies of {} in {}",
                self.marker("🗂 ", "[resolve]"),
                root_module,
                dependency_root.display()
            ),
            ResolveEvent::CommandStarted { command } => format!("  running {}", command),
            ResolveEvent::CommandFinished {
                command,
                elapsed,
                output_bytes,
            } => format!(
                "  {} {} ({} ms, {} bytes)",
                self.marker("✓", "ok"),
                command,
                elapsed.as_millis(),
                output_bytes
            ),
            ResolveEvent::TreeParsed { node_count } => {
                format!("  {} modules reported", node_count)
            }
            ResolveEvent::ModuleStoreResolved { path, from_config } => format!(
                "{} Module store: {}{}",
                self.marker("🗃 ", "[store]"),
                path.display(),
                if *from_config { "" } else { " (default)" }
            ),
            ResolveEvent::GraphBuilt { module_count } => {
                format!("  dependency graph has {} modules", module_count)
            }
            ResolveEvent::DependencyExcluded { parent, module } => {
                format!(" --> Excluding the dependency {} of {}", module, parent)
            }
            ResolveEvent::ClosureResolved { module_count } => {
                format!("  {} modules reachable", module_count)
            }
            ResolveEvent::PathsResolved { package_count } => {
                format!("  {} distinct paths", package_count)
            }
            ResolveEvent::Completed {
                package_count,
                excluded_count,
            } => format!(
                "{} {} production packages resolved ({} exclusions)",
                self.marker("🎉", "[done]"),
                package_count,
                excluded_count
            ),
        }
    }
}

impl ResolveEventSink for ConsoleEventSink {
    fn on_event(&self, event: ResolveEvent) {
        if self.verbosity < Self::required_verbosity(&event) {
            return;
        }
        let line = self.render(&event);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }
}
