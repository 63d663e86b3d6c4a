//! Resolve result types

use std::path::{Path, PathBuf};

use crate::domain::entities::ResolvedPackage;
use crate::domain::services::Exclusion;

/// Outcome of a successful resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveResult {
    /// Production packages in first-visited order, unique by path
    pub packages: Vec<ResolvedPackage>,
    /// Dependency edges dropped by the exclusion policy
    pub exclusions: Vec<Exclusion>,
    /// Module store the paths were resolved against
    pub module_store: PathBuf,
}

impl ResolveResult {
    /// Resolved directories, in order
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.packages.iter().map(ResolvedPackage::path)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.packages.iter().map(ResolvedPackage::name)
    }
}
