//! CommandRunner port
//!
//! Runs package-manager commands in a dependency root and hands back their
//! standard output. Infrastructure provides the process-based runner; tests
//! substitute canned outputs.

use std::fmt;
use std::path::Path;
use std::time::Duration;

/// The package-manager invocations the resolver relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManagerCommand {
    /// `list --json --prod` - every production module with its direct children
    ListProduction,
    /// `config current --json` - effective configuration, incl. `modulesFolder`
    CurrentConfig,
}

impl PackageManagerCommand {
    pub fn args(&self) -> &'static [&'static str] {
        match self {
            Self::ListProduction => &["list", "--json", "--prod"],
            Self::CurrentConfig => &["config", "current", "--json"],
        }
    }

    /// Full command line for messages, e.g. `yarn list --json --prod`
    pub fn command_line(&self, program: &str) -> String {
        format!("{} {}", program, self.args().join(" "))
    }
}

impl fmt::Display for PackageManagerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args().join(" "))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Unable to execute the command {command}: {message}")]
    Spawn { command: String, message: String },

    #[error("Command {command} exited with {}: {stderr}", exit_label(.code))]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Command {command} did not finish within {}s", .timeout.as_secs())]
    TimedOut { command: String, timeout: Duration },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

pub trait CommandRunner: Send + Sync {
    /// Run `command` with `cwd` as working directory and return its stdout.
    fn run(&self, command: PackageManagerCommand, cwd: &Path) -> Result<String, CommandError>;

    /// Name of the package-manager executable, for messages.
    fn program(&self) -> &str;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, command: PackageManagerCommand, cwd: &Path) -> Result<String, CommandError> {
        (**self).run(command, cwd)
    }

    fn program(&self) -> &str {
        (**self).program()
    }
}
