#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // Parsing arbitrary package-manager output must never panic
        if let Ok(nodes) = prodpack::parse_tree_output(raw) {
            let _ = prodpack::DependencyGraph::from_nodes(&nodes);
        }
    }
});
