use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// prodpack - list the production packages a module needs at runtime
#[derive(Parser, Debug)]
#[command(name = "prodpack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print the resolved paths
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the production dependency directories of a module
    Resolve {
        /// Module whose dependencies are collected (defaults to resolve.root_module)
        root_module: Option<String>,

        /// Directory the package manager runs in
        #[arg(short = 'd', long = "dependency-root")]
        dependency_root: Option<PathBuf>,

        /// Base directory of the node_modules fallback
        #[arg(long)]
        workspace_root: Option<PathBuf>,

        /// Leave a module and its subtree out (repeatable)
        #[arg(long = "exclude", value_name = "MODULE")]
        exclude: Vec<String>,

        /// Fail if a module is reachable (repeatable)
        #[arg(long = "forbid", value_name = "MODULE")]
        forbid: Vec<String>,

        /// Package manager executable
        #[arg(long)]
        package_manager: Option<String>,

        /// Per-command timeout in seconds
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,

        /// Fail when a resolved directory does not exist
        #[arg(long)]
        verify: bool,

        /// Configuration file (defaults to ./prodpack.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write a starter prodpack.toml
    Init {
        /// Directory to write prodpack.toml into
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing prodpack.toml
        #[arg(short, long)]
        force: bool,
    },
}
