//! Domain Entities
//!
//! - `TreeNode` - A module entry from the package manager report
//! - `DependencyGraph` - Adjacency map rebuilt from the report
//! - `ResolvedPackage` - A closure member with its on-disk location

mod graph;
mod resolved_package;
mod tree_node;

pub use graph::DependencyGraph;
pub use resolved_package::ResolvedPackage;
pub use tree_node::{bare_name, TreeNode};
