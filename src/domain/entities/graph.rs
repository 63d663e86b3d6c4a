//! DependencyGraph entity
//!
//! Adjacency map from bare module name to its direct dependencies, rebuilt
//! from the package manager report for every resolution.

use std::collections::HashMap;

use super::tree_node::{bare_name, TreeNode};

/// Module name → direct dependency names (unique, first-seen order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    edges: HashMap<String, Vec<String>>,
}

impl DependencyGraph {
    /// Build the graph from the reported node list.
    ///
    /// The package manager reports every installed module at the top level
    /// with its direct children. Only those top-level entries contribute
    /// edges; nested children are names only. Nodes seen more than once
    /// accumulate into the same edge list.
    pub fn from_nodes(nodes: &[TreeNode]) -> Self {
        let mut graph = Self::default();
        for node in nodes {
            graph.insert_node(node);
        }
        graph
    }

    fn insert_node(&mut self, node: &TreeNode) {
        let deps = self.edges.entry(node.bare_name().to_string()).or_default();
        for child in &node.children {
            let child_name = bare_name(&child.name);
            if !deps.iter().any(|d| d == child_name) {
                deps.push(child_name.to_string());
            }
        }
    }

    /// Record an edge directly (first-seen order, no duplicates).
    pub fn add_edge(&mut self, module: &str, dependency: &str) {
        let deps = self.edges.entry(module.to_string()).or_default();
        if !deps.iter().any(|d| d == dependency) {
            deps.push(dependency.to_string());
        }
    }

    /// Direct dependencies of `module`, or `None` when it was never reported.
    pub fn dependencies(&self, module: &str) -> Option<&[String]> {
        self.edges.get(module).map(Vec::as_slice)
    }

    pub fn contains(&self, module: &str) -> bool {
        self.edges.contains_key(module)
    }

    /// Number of modules with an entry
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a [&'a str])> for DependencyGraph {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a [&'a str])>>(iter: I) -> Self {
        let mut graph = Self::default();
        for (module, deps) in iter {
            graph.edges.entry(module.to_string()).or_default();
            for dep in deps {
                graph.add_edge(module, dep);
            }
        }
        graph
    }
}
