//! Common test utilities for prodpack CLI tests.
//!
//! `TestEnv` gives each test an isolated project and home directory and a
//! fake package manager that replays canned `--json` output.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a prodpack CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().unwrap(),
            home_dir: TempDir::new().unwrap(),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Module store used by `fake_package_manager`
    pub fn module_store(&self) -> PathBuf {
        self.project_path("store")
    }

    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Install a shell script answering `list` with `tree` and `config` with
    /// a configuration pointing at [`TestEnv::module_store`].
    ///
    /// Returns the `[package_manager]` section that runs it.
    pub fn fake_package_manager(&self, tree: &[(&str, &[&str])]) -> String {
        self.write_project_file("pm/list.out", &tree_output(tree));
        self.write_project_file(
            "pm/config.out",
            &config_output(&self.module_store().display().to_string()),
        );
        self.write_project_file(
            "pm/fake-yarn.sh",
            r#"dir=$(dirname "$0")
case "$1" in
  list) echo '{"type":"info","data":"fake-yarn"}'; cat "$dir/list.out" ;;
  config) cat "$dir/config.out" ;;
  *) echo "unknown command $1" >&2; exit 2 ;;
esac
"#,
        );
        format!(
            "[package_manager]\nprogram = \"sh\"\nargs = [{:?}]\n",
            self.project_path("pm/fake-yarn.sh").display().to_string()
        )
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        self.run_command(cwd, args, &[])
    }

    /// Run with extra environment variables set on top of the isolated ones.
    pub fn run_with_env(&self, args: &[&str], vars: &[(&str, &str)]) -> TestResult {
        self.run_command(self.project_root.path(), args, vars)
    }

    fn run_command(&self, cwd: &Path, args: &[&str], vars: &[(&str, &str)]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_prodpack"))
            .current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("PRODPACK_PACKAGE_MANAGER")
            .env_remove("PRODPACK_TIMEOUT_SECS")
            .env_remove("PRODPACK_VERBOSITY")
            .envs(vars.iter().copied())
            .output()
            .expect("Failed to execute prodpack");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// `list --json --prod` output with the given top-level nodes.
pub fn tree_output(nodes: &[(&str, &[&str])]) -> String {
    let trees: Vec<String> = nodes
        .iter()
        .map(|(name, children)| {
            let children: Vec<String> = children
                .iter()
                .map(|c| format!("{{\"name\":\"{c}\",\"color\":\"dim\",\"shadow\":true}}"))
                .collect();
            format!(
                "{{\"name\":\"{name}\",\"children\":[{}],\"hint\":null,\"color\":\"bold\",\"depth\":0}}",
                children.join(",")
            )
        })
        .collect();
    format!(
        "{{\"type\":\"tree\",\"data\":{{\"type\":\"list\",\"trees\":[{}]}}}}\n",
        trees.join(",")
    )
}

/// `config current --json` output with `modulesFolder` set.
pub fn config_output(modules_folder: &str) -> String {
    let config = format!(
        "{{\n  \"version-tag-prefix\": \"v\",\n  \"modulesFolder\": {}\n}}",
        serde_json::Value::from(modules_folder)
    );
    format!(
        "{{\"type\":\"log\",\"data\":{}}}\n",
        serde_json::Value::from(config)
    )
}
