//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PackError, PackResult};

use super::types::{Config, Verbosity};

/// Project configuration file name
pub const PROJECT_CONFIG_FILE: &str = "prodpack.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Key in a config file that no setting reads
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// `PRODPACK_*` variable whose value could not be used
    InvalidEnv {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "unknown key '{}' in {}", key, file.display())?;
                if let Some(line) = line {
                    write!(f, ":{}", line)?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{}'?)", suggestion)?;
                }
                Ok(())
            }
            ConfigWarning::InvalidEnv {
                var,
                value,
                expected,
            } => write!(f, "ignoring {}={:?}: expected {}", var, value, expected),
        }
    }
}

/// Configuration together with where it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the configuration was read from (`None` for built-in defaults)
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PackResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PackError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration hierarchy:
/// 1. `explicit` file (must exist)
/// 2. `<project_root>/prodpack.toml`
/// 3. `<config dir>/prodpack/config.toml`
/// 4. Built-in defaults
///
/// Environment overrides are applied on top of whichever layer was found.
pub fn discover(explicit: Option<&Path>, project_root: &Path) -> PackResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => [
            Some(project_root.join(PROJECT_CONFIG_FILE)),
            user_config_dir().map(|dir| dir.join("prodpack/config.toml")),
        ]
        .into_iter()
        .flatten()
        .find(|path| path.is_file()),
    };

    let (config, source, mut warnings) = match candidate {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            (config, Some(path), warnings)
        }
        None => (Config::default(), None, Vec::new()),
    };

    let (config, env_warnings) = with_env_overrides(config);
    warnings.extend(env_warnings);
    Ok(LoadedConfig {
        config,
        source,
        warnings,
    })
}

/// Apply environment variable overrides (PRODPACK_* prefix)
pub fn with_env_overrides(config: Config) -> (Config, Vec<ConfigWarning>) {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_overrides<F>(mut config: Config, lookup: F) -> (Config, Vec<ConfigWarning>)
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();

    // PRODPACK_PACKAGE_MANAGER
    if let Some(program) = lookup("PRODPACK_PACKAGE_MANAGER") {
        let program = program.trim();
        if !program.is_empty() {
            // Leading args belong to the replaced program.
            config.package_manager.program = program.to_string();
            config.package_manager.args.clear();
        }
    }

    // PRODPACK_TIMEOUT_SECS
    if let Some(value) = lookup("PRODPACK_TIMEOUT_SECS") {
        let parsed: Result<u64, _> = value.trim().parse();
        match parsed {
            Ok(secs) => config.package_manager.timeout_secs = secs,
            Err(_) => warnings.push(ConfigWarning::InvalidEnv {
                var: "PRODPACK_TIMEOUT_SECS",
                value,
                expected: "a whole number of seconds",
            }),
        }
    }

    // PRODPACK_VERBOSITY
    if let Some(verbosity) = lookup("PRODPACK_VERBOSITY") {
        config.output.verbosity = Verbosity::from_name(&verbosity);
    }

    (config, warnings)
}

/// XDG config directory, falling back to the platform default
fn user_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "package_manager",
        "program",
        "args",
        "timeout_secs",
        "resolve",
        "root_module",
        "dependency_root",
        "workspace_root",
        "verify_paths",
        "policy",
        "excluded",
        "forbidden",
        "output",
        "verbosity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
