//! ResolvedPackage entity - a closure member located in the module store

use std::path::{Path, PathBuf};

use serde::Serialize;

/// A production dependency and the directory holding its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPackage {
    name: String,
    path: PathBuf,
}

impl ResolvedPackage {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Bare module name (`@scope/name` or `name`)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location under the module store
    pub fn path(&self) -> &Path {
        &self.path
    }
}
