//! Path resolver
//!
//! Maps closure members to their directories in the module store.

use std::collections::HashSet;
use std::path::Path;

use crate::domain::entities::ResolvedPackage;

/// Locate every module under `module_store`, keeping the first occurrence
/// of each path.
pub fn resolve_paths<I, S>(module_store: &Path, modules: I) -> Vec<ResolvedPackage>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    modules
        .into_iter()
        .filter_map(|module| {
            let name = module.as_ref();
            let path = module_store.join(name);
            seen.insert(path.clone()).then(|| ResolvedPackage::new(name, path))
        })
        .collect()
}
