//! Property tests for closure resolution.

use std::collections::HashSet;

use proptest::prelude::*;

use prodpack::{resolve_closure, resolve_paths, DependencyGraph, ResolutionPolicy};

/// Random graph over modules `m0..m{n}`; `m0` is the root.
fn graph_strategy() -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1usize..=12).prop_flat_map(|n| {
        proptest::collection::vec(proptest::collection::vec(0..n, 0..=4), n)
    })
}

fn build_graph(adjacency: &[Vec<usize>]) -> DependencyGraph {
    let names: Vec<String> = (0..adjacency.len()).map(|i| format!("m{i}")).collect();
    let children: Vec<Vec<&str>> = adjacency
        .iter()
        .map(|deps| deps.iter().map(|&i| names[i].as_str()).collect())
        .collect();
    names
        .iter()
        .zip(&children)
        .map(|(name, deps)| (name.as_str(), deps.as_slice()))
        .collect()
}

/// Modules reachable from `m0` through at least one edge.
fn reachable(adjacency: &[Vec<usize>]) -> HashSet<String> {
    let mut seen = HashSet::new();
    let mut stack: Vec<usize> = adjacency[0].clone();
    while let Some(next) = stack.pop() {
        if seen.insert(next) {
            stack.extend(adjacency[next].iter().copied());
        }
    }
    seen.into_iter().map(|i| format!("m{i}")).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every reachable module appears exactly once, cycles included.
    #[test]
    fn property_closure_is_unique_and_complete(adjacency in graph_strategy()) {
        let graph = build_graph(&adjacency);

        let closure = resolve_closure("m0", &graph, &ResolutionPolicy::new()).unwrap();

        let unique: HashSet<&String> = closure.modules.iter().collect();
        prop_assert_eq!(unique.len(), closure.modules.len());
        prop_assert_eq!(
            closure.modules.iter().cloned().collect::<HashSet<_>>(),
            reachable(&adjacency)
        );
    }

    /// PROPERTY: resolution is deterministic for the same input.
    #[test]
    fn property_closure_is_stable(adjacency in graph_strategy()) {
        let graph = build_graph(&adjacency);
        let policy = ResolutionPolicy::new().with_excluded(["m1"]);

        let first = resolve_closure("m0", &graph, &policy).unwrap();
        let second = resolve_closure("m0", &graph, &policy).unwrap();

        prop_assert_eq!(first, second);
    }

    /// PROPERTY: forbidding a module fails exactly when it is reachable
    /// below the root's direct children.
    #[test]
    fn property_forbidden_module_detected(adjacency in graph_strategy(), target in 0usize..12) {
        prop_assume!(target < adjacency.len());
        let graph = build_graph(&adjacency);
        let target = format!("m{target}");
        let policy = ResolutionPolicy::new().with_forbidden([target.clone()]);

        let nested = resolve_closure("m0", &graph, &ResolutionPolicy::new())
            .unwrap()
            .modules
            .iter()
            .any(|m| graph.dependencies(m).unwrap_or_default().contains(&target));

        prop_assert_eq!(resolve_closure("m0", &graph, &policy).is_err(), nested);
    }

    /// PROPERTY: one path per closure member, under the module store.
    #[test]
    fn property_paths_follow_closure(adjacency in graph_strategy()) {
        let graph = build_graph(&adjacency);
        let store = std::path::Path::new("/store/node_modules");

        let closure = resolve_closure("m0", &graph, &ResolutionPolicy::new()).unwrap();
        let packages = resolve_paths(store, &closure.modules);

        prop_assert_eq!(packages.len(), closure.modules.len());
        for (package, module) in packages.iter().zip(&closure.modules) {
            prop_assert_eq!(package.name(), module.as_str());
            let expected = store.join(module);
            prop_assert_eq!(package.path(), expected.as_path());
        }
    }
}
