//! Resolve Use Case
//!
//! Orchestrates a production dependency resolution.
//!
//! This module handles:
//! - Running the package-manager commands in the dependency root
//! - Parsing the dependency report and configuration
//! - Rebuilding the graph and computing the closure under a policy
//! - Mapping the closure to module store paths (optionally verified on disk)

mod options;
mod result;
mod use_case;


pub use options::ResolveOptions;
pub use result::ResolveResult;
pub use use_case::ResolveUseCase;
