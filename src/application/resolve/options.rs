//! Resolve options

use std::path::PathBuf;

use crate::domain::policies::ResolutionPolicy;

/// Options for one resolution
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Module whose production dependencies are collected (not itself included)
    pub root_module: String,
    /// Directory the package-manager commands run in
    pub dependency_root: PathBuf,
    /// Base for the `node_modules` fallback (defaults to `dependency_root`)
    pub workspace_root: Option<PathBuf>,
    /// Exclusion and forbidden-package rules
    pub policy: ResolutionPolicy,
    /// Require every resolved path to exist on disk
    pub verify_paths: bool,
}

impl ResolveOptions {
    /// Create new resolve options
    pub fn new(root_module: impl Into<String>, dependency_root: impl Into<PathBuf>) -> Self {
        Self {
            root_module: root_module.into(),
            dependency_root: dependency_root.into(),
            ..Self::default()
        }
    }

    /// Set workspace root
    pub fn with_workspace_root(mut self, workspace_root: Option<PathBuf>) -> Self {
        self.workspace_root = workspace_root;
        self
    }

    /// Set policy
    pub fn with_policy(mut self, policy: ResolutionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set path verification
    pub fn with_verify_paths(mut self, verify_paths: bool) -> Self {
        self.verify_paths = verify_paths;
        self
    }

    /// Directory the module store fallback is resolved against
    pub fn effective_workspace_root(&self) -> &std::path::Path {
        self.workspace_root
            .as_deref()
            .unwrap_or(&self.dependency_root)
    }
}
