//! Package manager integration
//!
//! - `process` - Runs package-manager commands with a timeout
//! - `output` - Extracts the tree and config payloads from their output

pub mod output;
mod process;

pub use output::{
    module_store_dir, parse_config_output, parse_tree_output, ModuleStore, OutputParseError,
    DEFAULT_MODULES_DIR,
};
pub use process::{ProcessRunner, DEFAULT_TIMEOUT};
