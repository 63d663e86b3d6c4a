//! Resolve Use Case
//!
//! RunCommands → ParseTree → ParseConfig → BuildGraph → ResolveClosure →
//! ResolvePaths (→ VerifyPaths). Any failing phase aborts the resolution;
//! nothing partial is returned.

use std::path::Path;
use std::thread;
use std::time::Instant;

use crate::domain::entities::DependencyGraph;
use crate::domain::ports::{
    CommandError, CommandRunner, PackageManagerCommand, ResolveEvent, ResolveEventSink,
};
use crate::domain::services::{resolve_closure, resolve_paths};
use crate::error::{PackError, PackResult};
use crate::infrastructure::package_manager::{
    module_store_dir, parse_config_output, parse_tree_output,
};

use super::options::ResolveOptions;
use super::result::ResolveResult;

/// Resolve use case - computes the production package list of a root module
pub struct ResolveUseCase<R>
where
    R: CommandRunner,
{
    runner: R,
}

impl<R> ResolveUseCase<R>
where
    R: CommandRunner,
{
    /// Create a new resolve use case
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Run a full resolution.
    ///
    /// Holds no state between calls; concurrent calls with different
    /// options are independent.
    pub fn execute(
        &self,
        options: &ResolveOptions,
        events: &dyn ResolveEventSink,
    ) -> PackResult<ResolveResult> {
        events.on_event(ResolveEvent::Started {
            root_module: options.root_module.clone(),
            dependency_root: options.dependency_root.clone(),
        });

        let (tree_output, config_output) = self.run_commands(&options.dependency_root, events)?;

        let nodes = parse_tree_output(&tree_output)?;
        events.on_event(ResolveEvent::TreeParsed {
            node_count: nodes.len(),
        });

        let config = parse_config_output(&config_output)?;
        let store = module_store_dir(&config, options.effective_workspace_root());
        events.on_event(ResolveEvent::ModuleStoreResolved {
            path: store.path.clone(),
            from_config: store.from_config,
        });

        let graph = DependencyGraph::from_nodes(&nodes);
        events.on_event(ResolveEvent::GraphBuilt {
            module_count: graph.len(),
        });

        let closure = resolve_closure(&options.root_module, &graph, &options.policy)?;
        for exclusion in &closure.exclusions {
            events.on_event(ResolveEvent::DependencyExcluded {
                parent: exclusion.parent.clone(),
                module: exclusion.module.clone(),
            });
        }
        events.on_event(ResolveEvent::ClosureResolved {
            module_count: closure.modules.len(),
        });

        let packages = resolve_paths(&store.path, &closure.modules);
        events.on_event(ResolveEvent::PathsResolved {
            package_count: packages.len(),
        });

        if options.verify_paths {
            if let Some(missing) = packages.iter().find(|p| !p.path().exists()) {
                return Err(PackError::MissingDependency {
                    module: missing.name().to_string(),
                    path: missing.path().to_path_buf(),
                });
            }
        }

        events.on_event(ResolveEvent::Completed {
            package_count: packages.len(),
            excluded_count: closure.exclusions.len(),
        });

        Ok(ResolveResult {
            packages,
            exclusions: closure.exclusions,
            module_store: store.path,
        })
    }

    /// Run the tree listing and the config dump concurrently.
    ///
    /// Both commands always run to completion; a tree failure is reported
    /// ahead of a config failure.
    fn run_commands(
        &self,
        cwd: &Path,
        events: &dyn ResolveEventSink,
    ) -> PackResult<(String, String)> {
        let run = |command: PackageManagerCommand| -> Result<String, CommandError> {
            events.on_event(ResolveEvent::CommandStarted { command });
            let started = Instant::now();
            let output = self.runner.run(command, cwd)?;
            events.on_event(ResolveEvent::CommandFinished {
                command,
                elapsed: started.elapsed(),
                output_bytes: output.len(),
            });
            Ok(output)
        };

        let (tree, config) = thread::scope(|s| {
            let config = s.spawn(|| run(PackageManagerCommand::CurrentConfig));
            let tree = run(PackageManagerCommand::ListProduction);
            let config = config
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
            (tree, config)
        });

        Ok((tree?, config?))
    }
}
