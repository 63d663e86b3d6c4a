//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::policies::ResolutionPolicy;
use crate::error::PackResult;

use super::loader::{self, ConfigWarning, LoadedConfig};

/// Package manager invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageManagerConfig {
    /// Executable to run (`yarn`, `corepack`, ...)
    #[serde(default = "default_program")]
    pub program: String,

    /// Arguments placed before the subcommand (`["yarn"]` for `corepack yarn`)
    #[serde(default)]
    pub args: Vec<String>,

    /// Upper bound for each command, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for PackageManagerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: Vec::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PackageManagerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_program() -> String {
    "yarn".to_string()
}

fn default_timeout_secs() -> u64 {
    300
}

/// What to resolve and where
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ResolveConfig {
    /// Module whose production dependencies are collected
    #[serde(default)]
    pub root_module: Option<String>,

    /// Directory the package-manager commands run in
    #[serde(default)]
    pub dependency_root: Option<PathBuf>,

    /// Base of the `node_modules` fallback when the package manager does not
    /// report `modulesFolder`
    #[serde(default)]
    pub workspace_root: Option<PathBuf>,

    /// Fail when a resolved package directory does not exist
    #[serde(default)]
    pub verify_paths: bool,
}

/// Exclusion and forbidden-package lists
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PolicyConfig {
    /// Modules left out of the bundle along with their subtree
    #[serde(default)]
    pub excluded: Vec<String>,

    /// Modules that must never be reachable
    #[serde(default)]
    pub forbidden: Vec<String>,
}

impl PolicyConfig {
    pub fn to_policy(&self) -> ResolutionPolicy {
        ResolutionPolicy::new()
            .with_excluded(self.excluded.iter().cloned())
            .with_forbidden(self.forbidden.iter().cloned())
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Parse a level name; unknown names map to `Normal`.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        }
    }

    /// Level after `-v` flags are applied
    pub fn raised_by(self, flags: u8) -> Self {
        match (self as u8).saturating_add(flags) {
            0 => Verbosity::Quiet,
            1 => Verbosity::Normal,
            2 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub package_manager: PackageManagerConfig,

    #[serde(default)]
    pub resolve: ResolveConfig,

    #[serde(default)]
    pub policy: PolicyConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PackResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PackResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, the project config, the user config, or
    /// defaults - in that order - then apply environment overrides.
    pub fn discover(explicit: Option<&Path>, project_root: &Path) -> PackResult<LoadedConfig> {
        loader::discover(explicit, project_root)
    }

    /// Apply environment variable overrides (PRODPACK_* prefix), returning
    /// warnings for values that could not be used.
    pub fn with_env_overrides(self) -> (Self, Vec<ConfigWarning>) {
        loader::with_env_overrides(self)
    }
}
