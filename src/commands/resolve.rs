//! Resolve command - print the production package directories of a module

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};

use prodpack::config::{Config, ConfigWarning, Verbosity};
use prodpack::domain::ports::ResolveEventSink;
use prodpack::infrastructure::{ConsoleEventSink, JsonEventSink};
use prodpack::{ProcessRunner, ResolveOptions, ResolveUseCase};

/// Command-line values for `prodpack resolve`; `None` falls back to config.
#[derive(Debug, Default)]
pub struct ResolveArgs {
    pub root_module: Option<String>,
    pub dependency_root: Option<PathBuf>,
    pub workspace_root: Option<PathBuf>,
    pub exclude: Vec<String>,
    pub forbid: Vec<String>,
    pub package_manager: Option<String>,
    pub timeout: Option<u64>,
    pub verify: bool,
    pub config: Option<PathBuf>,
}

pub fn cmd_resolve(args: ResolveArgs, json: bool, verbose: u8, quiet: bool) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read the current directory")?;
    let loaded = Config::discover(args.config.as_deref(), &cwd)?;
    report_warnings(&loaded.warnings, json);

    // Relative paths in a config file are relative to that file.
    let config_base = loaded
        .source
        .as_deref()
        .and_then(Path::parent)
        .map(|dir| absolutize(&cwd, dir))
        .unwrap_or_else(|| cwd.clone());

    let (options, runner) = build(args, &loaded.config, &cwd, &config_base)?;

    let verbosity = if quiet {
        Verbosity::Quiet
    } else {
        loaded.config.output.verbosity.raised_by(verbose)
    };
    let sink: Box<dyn ResolveEventSink> = if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stderr(verbosity))
    };

    let result = ResolveUseCase::new(runner).execute(&options, sink.as_ref())?;

    if json {
        crate::ui::json::emit(crate::ui::json::resolved_event(&result.packages))?;
        return Ok(());
    }

    let mut out = io::stdout().lock();
    for path in result.paths() {
        writeln!(out, "{}", path.display())?;
    }
    out.flush()?;
    Ok(())
}

/// Merge CLI values over the loaded configuration.
fn build(
    args: ResolveArgs,
    config: &Config,
    cwd: &Path,
    config_base: &Path,
) -> Result<(ResolveOptions, ProcessRunner)> {
    let root_module = args
        .root_module
        .or_else(|| config.resolve.root_module.clone())
        .context("no root module given: pass ROOT_MODULE or set resolve.root_module")?;

    let dependency_root = match (&args.dependency_root, &config.resolve.dependency_root) {
        (Some(dir), _) => absolutize(cwd, dir),
        (None, Some(dir)) => absolutize(config_base, dir),
        (None, None) => cwd.to_path_buf(),
    };
    let workspace_root = match (&args.workspace_root, &config.resolve.workspace_root) {
        (Some(dir), _) => Some(absolutize(cwd, dir)),
        (None, Some(dir)) => Some(absolutize(config_base, dir)),
        (None, None) => None,
    };

    let policy = config
        .policy
        .to_policy()
        .with_excluded(args.exclude)
        .with_forbidden(args.forbid);

    let options = ResolveOptions::new(root_module, dependency_root)
        .with_workspace_root(workspace_root)
        .with_policy(policy)
        .with_verify_paths(args.verify || config.resolve.verify_paths);

    let timeout = args
        .timeout
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.package_manager.timeout());
    let runner = match args.package_manager {
        Some(program) => ProcessRunner::new(program),
        None => ProcessRunner::new(config.package_manager.program.clone())
            .with_leading_args(config.package_manager.args.iter().cloned()),
    }
    .with_timeout(timeout);

    Ok((options, runner))
}

fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn report_warnings(warnings: &[ConfigWarning], json: bool) {
    for warning in warnings {
        if json {
            let _ = crate::ui::json::emit(warning_event(warning));
        } else {
            eprintln!("[WARN] {}", warning);
        }
    }
}

fn warning_event(warning: &ConfigWarning) -> serde_json::Value {
    match warning {
        ConfigWarning::UnknownKey {
            key,
            file,
            line,
            suggestion,
        } => serde_json::json!({
            "event": "warning",
            "kind": "config",
            "key": key,
            "file": file.display().to_string(),
            "line": line,
            "suggestion": suggestion,
        }),
        ConfigWarning::InvalidEnv {
            var,
            value,
            expected,
        } => serde_json::json!({
            "event": "warning",
            "kind": "env",
            "var": var,
            "value": value,
            "expected": expected,
        }),
    }
}
