//! Closure resolver
//!
//! Computes the production dependencies reachable from a root module,
//! applying a [`ResolutionPolicy`] on the way down.

use std::collections::HashSet;

use crate::domain::entities::DependencyGraph;
use crate::domain::policies::ResolutionPolicy;

/// A dependency edge dropped by the exclusion policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusion {
    /// Module that declared the dependency
    pub parent: String,
    /// Excluded dependency
    pub module: String,
}

/// Result of a closure computation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Closure {
    /// Reachable modules in first-visited order, root not included
    pub modules: Vec<String>,
    /// Every excluded edge met during the walk
    pub exclusions: Vec<Exclusion>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ClosureError {
    #[error("The initial module {module} was not found in dependencies")]
    RootNotFound { module: String },

    #[error("Forbidden dependencies {} found as dependencies of {parent}", .modules.join(", "))]
    ForbiddenDependency { parent: String, modules: Vec<String> },
}

/// Walk `graph` depth-first from the children of `root`.
///
/// The root's own children are taken as reported. For every other visited
/// module, excluded children are dropped first and the remaining ones are
/// checked against the forbidden set; one forbidden child fails the whole
/// resolution. Each module is expanded at most once, so cycles terminate.
pub fn resolve_closure(
    root: &str,
    graph: &DependencyGraph,
    policy: &ResolutionPolicy,
) -> Result<Closure, ClosureError> {
    let root_deps = graph
        .dependencies(root)
        .ok_or_else(|| ClosureError::RootNotFound {
            module: root.to_string(),
        })?;

    let mut closure = Closure::default();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack: Vec<std::vec::IntoIter<&str>> = vec![root_deps
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .into_iter()];

    while let Some(frame) = stack.last_mut() {
        let Some(module) = frame.next() else {
            stack.pop();
            continue;
        };

        if !visited.insert(module) {
            continue;
        }
        closure.modules.push(module.to_string());

        let Some(deps) = graph.dependencies(module) else {
            continue;
        };

        let mut kept = Vec::with_capacity(deps.len());
        for dep in deps {
            if policy.is_excluded(dep) {
                closure.exclusions.push(Exclusion {
                    parent: module.to_string(),
                    module: dep.clone(),
                });
            } else {
                kept.push(dep.as_str());
            }
        }

        let forbidden: Vec<String> = kept
            .iter()
            .filter(|dep| policy.is_forbidden(dep))
            .map(|dep| dep.to_string())
            .collect();
        if !forbidden.is_empty() {
            return Err(ClosureError::ForbiddenDependency {
                parent: module.to_string(),
                modules: forbidden,
            });
        }

        stack.push(kept.into_iter());
    }

    Ok(closure)
}
