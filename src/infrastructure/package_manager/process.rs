//! Process-based command runner
//!
//! Spawns the package manager as a child process in the dependency root.
//! Every run is bounded by a timeout; an expired child is killed and
//! reported as [`CommandError::TimedOut`], never as a failed exit.

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::domain::ports::{CommandError, CommandRunner, PackageManagerCommand};

/// Default bound for a single package-manager command
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Runs package-manager commands as child processes.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    /// Executable, e.g. `yarn`
    program: String,
    /// Arguments placed before the command arguments (`corepack yarn ...`)
    leading_args: Vec<String>,
    timeout: Duration,
}

impl ProcessRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn display_program(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.leading_args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Read a pipe to its end. A read error keeps what arrived before it; the
/// exit status still decides success.
fn read_pipe<R: Read>(pipe: Option<R>) -> String {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        if let Err(e) = pipe.read_to_end(&mut buf) {
            buf.extend_from_slice(format!("\n[output truncated: {e}]").as_bytes());
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Kill the child and reap it so no zombie is left behind.
fn kill_and_reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

impl CommandRunner for ProcessRunner {
    fn run(&self, command: PackageManagerCommand, cwd: &Path) -> Result<String, CommandError> {
        let command_line = command.command_line(&self.display_program());

        let mut child = Command::new(&self.program)
            .args(&self.leading_args)
            .args(command.args())
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| CommandError::Spawn {
                command: command_line.clone(),
                message: e.to_string(),
            })?;

        // Drain both pipes while waiting so a chatty child cannot block on a
        // full pipe buffer.
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let stdout_reader = thread::spawn(move || read_pipe(stdout));
        let stderr_reader = thread::spawn(move || read_pipe(stderr));

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if Instant::now() >= deadline => {
                    kill_and_reap(&mut child);
                    return Err(CommandError::TimedOut {
                        command: command_line,
                        timeout: self.timeout,
                    });
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => {
                    kill_and_reap(&mut child);
                    return Err(CommandError::Spawn {
                        command: command_line,
                        message: e.to_string(),
                    });
                }
            }
        };

        let stdout = stdout_reader.join().unwrap_or_default();
        let stderr = stderr_reader.join().unwrap_or_default();

        if !status.success() {
            return Err(CommandError::Failed {
                command: command_line,
                code: status.code(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(stdout)
    }

    fn program(&self) -> &str {
        &self.program
    }
}
