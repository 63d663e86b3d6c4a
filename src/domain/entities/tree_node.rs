//! TreeNode entity - one entry of the package manager's dependency report
//!
//! The package manager reports modules as `name@version`. Scoped modules
//! start with `@` (`@scope/name@1.0.0`), so the version separator is always
//! the *last* `@` in the string.

use serde::Deserialize;

/// A module as reported by `list --json --prod`.
///
/// Extra fields emitted by the package manager (`color`, `depth`, `shadow`)
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TreeNode {
    /// `name@version` as reported
    pub name: String,
    /// Direct dependencies, in reported order
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a leaf node
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Attach children (builder style, mostly used in tests)
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    /// Module name without the version suffix
    pub fn bare_name(&self) -> &str {
        bare_name(&self.name)
    }
}

/// Strip the `@version` suffix from a reported module name.
///
/// A leading `@` is part of a scoped name and never a split point; a name
/// without a version is returned unchanged.
pub fn bare_name(reported: &str) -> &str {
    match reported.rfind('@') {
        Some(0) | None => reported,
        Some(idx) => &reported[..idx],
    }
}
