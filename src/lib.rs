//! prodpack - production dependency resolver for yarn workspaces
//!
//! prodpack asks the package manager for the production dependency tree of a
//! workspace and its current configuration, then computes the transitive
//! closure of a root module and maps every member to its directory in the
//! module store. The result is the list of package directories to copy into
//! a runtime image or plugin bundle.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{ResolveOptions, ResolveResult, ResolveUseCase};
pub use config::{Config, Verbosity};
pub use domain::entities::{DependencyGraph, ResolvedPackage, TreeNode};
pub use domain::policies::ResolutionPolicy;
pub use domain::services::{resolve_closure, resolve_paths, Closure, ClosureError, Exclusion};
pub use error::{PackError, PackResult};
pub use infrastructure::package_manager::{
    module_store_dir, parse_config_output, parse_tree_output, OutputParseError,
};
pub use infrastructure::ProcessRunner;
