//! Property tests for package-manager output parsing.

use proptest::prelude::*;

use prodpack::{parse_config_output, parse_tree_output};

fn module_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("(@[a-z]{1,6}/)?[a-z][a-z0-9.-]{0,10}@[0-9]\\.[0-9]\\.[0-9]").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsers never panic on arbitrary input.
    #[test]
    fn property_parsers_never_panic(raw in "(?s).{0,256}") {
        let _ = parse_tree_output(&raw);
        let _ = parse_config_output(&raw);
    }

    /// PROPERTY: the envelope is found among arbitrary progress lines.
    #[test]
    fn property_tree_envelope_found_between_noise(
        names in proptest::collection::vec(module_name(), 0..=6),
        noise in proptest::collection::vec("[a-z ]{0,30}", 0..=4),
    ) {
        let trees: Vec<String> = names
            .iter()
            .map(|n| format!("{{\"name\":\"{n}\",\"children\":[],\"depth\":0}}"))
            .collect();
        let envelope = format!(
            "{{\"type\":\"tree\",\"data\":{{\"type\":\"list\",\"trees\":[{}]}}}}",
            trees.join(",")
        );
        let mut lines = noise.clone();
        lines.insert(noise.len() / 2, envelope);

        let nodes = parse_tree_output(&lines.join("\n")).unwrap();

        prop_assert_eq!(
            nodes.iter().map(|n| n.name.clone()).collect::<Vec<_>>(),
            names
        );
    }
}
