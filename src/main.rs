//! prodpack CLI - production dependency resolver
//!
//! Usage: prodpack <COMMAND>
//!
//! Commands:
//!   resolve  Print the package directories a module needs at runtime
//!   init     Write a starter prodpack.toml

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use commands::resolve::ResolveArgs;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Resolve {
            root_module,
            dependency_root,
            workspace_root,
            exclude,
            forbid,
            package_manager,
            timeout,
            verify,
            config,
        } => commands::resolve::cmd_resolve(
            ResolveArgs {
                root_module,
                dependency_root,
                workspace_root,
                exclude,
                forbid,
                package_manager,
                timeout,
                verify,
                config,
            },
            cli.json,
            cli.verbose,
            cli.quiet,
        ),
        Commands::Init { path, force } => commands::init::cmd_init(&path, force, cli.json),
    }
}
