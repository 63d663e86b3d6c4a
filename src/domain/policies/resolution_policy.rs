//! Resolution Policy
//!
//! Which modules are dropped from the closure and which ones must never be
//! reachable at all. Passed explicitly into every resolution.

use std::collections::BTreeSet;

/// Exclusion and forbidden-package sets for one resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionPolicy {
    excluded: BTreeSet<String>,
    forbidden: BTreeSet<String>,
}

impl ResolutionPolicy {
    /// Empty policy: nothing excluded, nothing forbidden
    pub fn new() -> Self {
        Self::default()
    }

    /// Add modules whose subtree is silently left out of the closure.
    pub fn with_excluded<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded.extend(modules.into_iter().map(Into::into));
        self
    }

    /// Add modules whose presence aborts the resolution.
    pub fn with_forbidden<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forbidden.extend(modules.into_iter().map(Into::into));
        self
    }

    pub fn is_excluded(&self, module: &str) -> bool {
        self.excluded.contains(module)
    }

    pub fn is_forbidden(&self, module: &str) -> bool {
        self.forbidden.contains(module)
    }

    pub fn excluded(&self) -> impl Iterator<Item = &str> {
        self.excluded.iter().map(String::as_str)
    }

    pub fn forbidden(&self) -> impl Iterator<Item = &str> {
        self.forbidden.iter().map(String::as_str)
    }
}
