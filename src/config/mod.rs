//! Configuration module for prodpack
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PRODPACK_*)
//! 3. `--config` file, or project config (./prodpack.toml)
//! 4. User config (~/.config/prodpack/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{
    Config, OutputConfig, PackageManagerConfig, PolicyConfig, ResolveConfig, Verbosity,
};
