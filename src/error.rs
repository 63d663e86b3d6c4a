//! Error types for prodpack
//!
//! Uses `thiserror` for library errors; each layer keeps its own enum and
//! converts into [`PackError`] at the use-case boundary.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::CommandError;
use crate::domain::services::ClosureError;
use crate::infrastructure::package_manager::OutputParseError;

/// Result type alias for prodpack operations
pub type PackResult<T> = Result<T, PackError>;

/// Main error type for prodpack operations
#[derive(Error, Debug)]
pub enum PackError {
    /// Package-manager output did not have the expected shape
    #[error(transparent)]
    Parse(#[from] OutputParseError),

    /// Root module missing or forbidden dependency reached
    #[error(transparent)]
    Closure(#[from] ClosureError),

    /// Package-manager command could not run, failed, or timed out
    #[error(transparent)]
    Command(#[from] CommandError),

    /// A resolved dependency is not on disk
    #[error("The dependency {module} is referenced but is not available on the filesystem: {path}")]
    MissingDependency { module: String, path: PathBuf },

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PackError {
    /// Whether the failure came from the forbidden-package policy
    pub fn is_forbidden_dependency(&self) -> bool {
        matches!(
            self,
            PackError::Closure(ClosureError::ForbiddenDependency { .. })
        )
    }

    /// Whether a package-manager command ran out of time
    pub fn is_timeout(&self) -> bool {
        matches!(self, PackError::Command(CommandError::TimedOut { .. }))
    }
}
