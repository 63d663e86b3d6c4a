//! Package-manager output parsing
//!
//! `--json` mode prints one JSON object per line. The payloads the resolver
//! needs are wrapped in fixed envelopes:
//!
//! - `list --json --prod`: `{"type":"tree","data":{"type":"list","trees":[...]}}`
//! - `config current --json`: `{"type":"log","data":"<escaped JSON>"}`
//!
//! An envelope must span a whole line and appear exactly once.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::domain::entities::TreeNode;
use crate::domain::ports::PackageManagerCommand;

/// Default module store directory name under the workspace root
pub const DEFAULT_MODULES_DIR: &str = "node_modules";

#[derive(Debug, thiserror::Error)]
pub enum OutputParseError {
    #[error("Not able to find {expected} when executing {command} ({matches} matching lines). Found {output}")]
    EnvelopeNotFound {
        command: PackageManagerCommand,
        expected: &'static str,
        matches: usize,
        output: String,
    },

    #[error("Invalid JSON in the output of {command}: {message}. Found {output}")]
    InvalidJson {
        command: PackageManagerCommand,
        message: String,
        output: String,
    },
}

fn tree_envelope() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?m)^\{"type":"tree","data":\{"type":"list","trees":(.*)\}\}\r?$"#)
            .expect("tree envelope pattern is valid")
    })
}

fn config_envelope() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?m)^\{"type":"log","data":"(.*)"\}\r?$"#)
            .expect("config envelope pattern is valid")
    })
}

fn extract_single<'a>(
    re: &Regex,
    raw: &'a str,
    command: PackageManagerCommand,
    expected: &'static str,
) -> Result<&'a str, OutputParseError> {
    let payloads: Vec<&str> = re
        .captures_iter(raw)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect();

    match payloads.as_slice() {
        [payload] => Ok(*payload),
        _ => Err(OutputParseError::EnvelopeNotFound {
            command,
            expected,
            matches: payloads.len(),
            output: raw.to_string(),
        }),
    }
}

/// Extract the reported module list from `list --json --prod` output.
pub fn parse_tree_output(raw: &str) -> Result<Vec<TreeNode>, OutputParseError> {
    let command = PackageManagerCommand::ListProduction;
    let payload = extract_single(tree_envelope(), raw, command, "a dependency tree")?;

    serde_json::from_str(payload).map_err(|e| OutputParseError::InvalidJson {
        command,
        message: e.to_string(),
        output: raw.to_string(),
    })
}

/// Extract and decode the configuration object from `config current --json`.
pub fn parse_config_output(raw: &str) -> Result<Value, OutputParseError> {
    let command = PackageManagerCommand::CurrentConfig;
    let escaped = extract_single(config_envelope(), raw, command, "the configuration")?;

    let invalid = |e: serde_json::Error| OutputParseError::InvalidJson {
        command,
        message: e.to_string(),
        output: raw.to_string(),
    };

    // The payload is the body of a JSON string literal (`\n`, `\"`, ...).
    let unescaped: String = serde_json::from_str(&format!("\"{escaped}\"")).map_err(invalid)?;
    serde_json::from_str(&unescaped).map_err(invalid)
}

/// Where module payloads live on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleStore {
    pub path: PathBuf,
    /// `true` when taken from the package-manager configuration
    pub from_config: bool,
}

/// Module store from the configuration's `modulesFolder`, or
/// `<workspace_root>/node_modules` when it is not set.
pub fn module_store_dir(config: &Value, workspace_root: &Path) -> ModuleStore {
    match config.get("modulesFolder").and_then(Value::as_str) {
        Some(folder) if !folder.is_empty() => ModuleStore {
            path: workspace_root.join(folder),
            from_config: true,
        },
        _ => ModuleStore {
            path: workspace_root.join(DEFAULT_MODULES_DIR),
            from_config: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TREE_OUTPUT: &str = concat!(
        r#"{"type":"info","data":"Visiting workspace."}"#,
        "\n",
        r#"{"type":"tree","data":{"type":"list","trees":[{"name":"@eclipse-che/theia-assembly@0.3.0","children":[{"name":"@theia/core@0.3.10","color":"dim","shadow":true}],"hint":null,"color":"bold","depth":0},{"name":"@theia/core@0.3.10","children":[],"depth":0}]}}"#,
        "\n",
    );

    #[test]
    fn parses_tree_envelope() {
        let nodes = parse_tree_output(TREE_OUTPUT).unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].bare_name(), "@eclipse-che/theia-assembly");
        assert_eq!(nodes[0].children[0].bare_name(), "@theia/core");
    }

    #[test]
    fn tree_with_crlf_line_endings() {
        let raw = "{\"type\":\"tree\",\"data\":{\"type\":\"list\",\"trees\":[]}}\r\n";
        assert!(parse_tree_output(raw).unwrap().is_empty());
    }

    #[test]
    fn tree_envelope_missing() {
        let err = parse_tree_output("error An unexpected error occurred").unwrap_err();
        match err {
            OutputParseError::EnvelopeNotFound {
                matches, output, ..
            } => {
                assert_eq!(matches, 0);
                assert_eq!(output, "error An unexpected error occurred");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn tree_envelope_must_span_the_line() {
        let raw = r#"prefix {"type":"tree","data":{"type":"list","trees":[]}}"#;
        assert!(matches!(
            parse_tree_output(raw),
            Err(OutputParseError::EnvelopeNotFound { matches: 0, .. })
        ));
    }

    #[test]
    fn tree_envelope_twice_is_rejected() {
        let line = r#"{"type":"tree","data":{"type":"list","trees":[]}}"#;
        let raw = format!("{line}\n{line}\n");
        assert!(matches!(
            parse_tree_output(&raw),
            Err(OutputParseError::EnvelopeNotFound { matches: 2, .. })
        ));
    }

    #[test]
    fn tree_payload_must_be_json() {
        let raw = r#"{"type":"tree","data":{"type":"list","trees":[{"name":}]}}"#;
        assert!(matches!(
            parse_tree_output(raw),
            Err(OutputParseError::InvalidJson { .. })
        ));
    }

    #[test]
    fn parses_config_envelope() {
        let raw = r#"{"type":"log","data":"{\"modulesFolder\":\"/tmp/nm\"}"}"#;
        let config = parse_config_output(raw).unwrap();
        assert_eq!(config["modulesFolder"], "/tmp/nm");
    }

    #[test]
    fn config_with_escaped_newlines() {
        let raw = r#"{"type":"log","data":"{\n  \"version-tag-prefix\": \"v\",\n  \"modulesFolder\": null\n}"}"#;
        let config = parse_config_output(raw).unwrap();
        assert_eq!(config["version-tag-prefix"], "v");
        assert!(config["modulesFolder"].is_null());
    }

    #[test]
    fn config_envelope_missing() {
        let err = parse_config_output(r#"{"modulesFolder":"/tmp/nm"}"#).unwrap_err();
        assert!(matches!(err, OutputParseError::EnvelopeNotFound { .. }));
        assert!(err.to_string().contains("config current --json"));
    }

    #[test]
    fn config_payload_must_be_json() {
        let raw = r#"{"type":"log","data":"not json"}"#;
        assert!(matches!(
            parse_config_output(raw),
            Err(OutputParseError::InvalidJson { .. })
        ));
    }

    #[test]
    fn module_store_from_config() {
        let config = serde_json::json!({ "modulesFolder": "/tmp/nm" });
        let store = module_store_dir(&config, Path::new("/work"));
        assert_eq!(store.path, PathBuf::from("/tmp/nm"));
        assert!(store.from_config);
    }

    #[test]
    fn module_store_falls_back_to_node_modules() {
        for config in [
            serde_json::json!({}),
            serde_json::json!({ "modulesFolder": null }),
            serde_json::json!({ "modulesFolder": "" }),
        ] {
            let store = module_store_dir(&config, Path::new("/work"));
            assert_eq!(store.path, PathBuf::from("/work/node_modules"));
            assert!(!store.from_config);
        }
    }
}
