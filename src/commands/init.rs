//! Init command - write a starter prodpack.toml

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};

use prodpack::config::PROJECT_CONFIG_FILE;

/// Starter configuration for a Theia-based assembly.
pub const CONFIG_TEMPLATE: &str = r#"# prodpack configuration

[package_manager]
program = "yarn"
# Arguments placed before the subcommand, e.g. program = "corepack" with args = ["yarn"]
args = []
timeout_secs = 300

[resolve]
# Module whose production dependencies are collected
root_module = "@eclipse-che/theia-assembly"
# Directory the package manager runs in, relative to this file
dependency_root = "."
# node_modules fallback base when yarn reports no modulesFolder
# workspace_root = "."
verify_paths = false

[policy]
# Left out of the bundle together with their subtree
excluded = [
    "electron",
    "react",
    "react-virtualized",
    "onigasm",
    "oniguruma",
    "@theia/monaco",
    "monaco-css",
    "react-dom",
    "font-awesome",
    "monaco-html",
    "@typefox/monaco-editor-core",
]
# Resolution fails if any of these is reachable
forbidden = [
    "webpack",
    "webpack-cli",
    "@theia/application-manager",
]

[output]
verbosity = "normal"
"#;

pub fn cmd_init(path: &Path, force: bool, json: bool) -> Result<()> {
    let target = path.join(PROJECT_CONFIG_FILE);

    if target.exists() && !force {
        if json {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "error",
                "command": "init",
                "kind": "already_exists",
                "path": target.display().to_string(),
                "message": "prodpack.toml already exists"
            }));
        }
        bail!(
            "{} already exists. Use --force to overwrite.",
            target.display()
        );
    }

    std::fs::create_dir_all(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_atomic(path, &target, CONFIG_TEMPLATE)?;

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "init",
            "path": target.display().to_string(),
        }))?;
    } else {
        eprintln!("Created {}", target.display());
    }
    Ok(())
}

/// Write through a temp file in the same directory, then rename into place.
fn write_atomic(dir: &Path, target: &Path, content: &str) -> Result<()> {
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create a temp file in {}", dir.display()))?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.persist(target)
        .with_context(|| format!("failed to write {}", target.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodpack::Config;
    use tempfile::tempdir;

    #[test]
    fn template_parses_without_warnings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PROJECT_CONFIG_FILE);
        std::fs::write(&path, CONFIG_TEMPLATE).unwrap();

        let (config, warnings) = Config::load_with_warnings(&path).unwrap();

        assert!(warnings.is_empty());
        assert_eq!(
            config.resolve.root_module.as_deref(),
            Some("@eclipse-che/theia-assembly")
        );
        assert_eq!(config.policy.excluded.len(), 11);
        assert_eq!(
            config.policy.forbidden,
            vec!["webpack", "webpack-cli", "@theia/application-manager"]
        );
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(PROJECT_CONFIG_FILE), "# mine\n").unwrap();

        assert!(cmd_init(dir.path(), false, false).is_err());
        assert_eq!(
            std::fs::read_to_string(dir.path().join(PROJECT_CONFIG_FILE)).unwrap(),
            "# mine\n"
        );

        cmd_init(dir.path(), true, false).unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join(PROJECT_CONFIG_FILE)).unwrap(),
            CONFIG_TEMPLATE
        );
    }
}
