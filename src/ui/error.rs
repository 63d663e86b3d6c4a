use prodpack::domain::ports::CommandError;
use prodpack::{ClosureError, OutputParseError, PackError};

/// Hint shown under an error in text mode.
fn fix_hint(err: &PackError) -> Option<&'static str> {
    match err {
        PackError::Closure(ClosureError::RootNotFound { .. }) => Some(
            "Check the module name and that it is listed by 'yarn list --prod' in the dependency root.",
        ),
        PackError::Closure(ClosureError::ForbiddenDependency { .. }) => {
            Some("Remove the dependency, or move it to devDependencies.")
        }
        PackError::Command(CommandError::Spawn { .. }) => {
            Some("Install the package manager or set package_manager.program in prodpack.toml.")
        }
        PackError::Command(CommandError::TimedOut { .. }) => {
            Some("Raise package_manager.timeout_secs or pass --timeout.")
        }
        PackError::Parse(OutputParseError::EnvelopeNotFound { .. }) => {
            Some("The package manager output is not yarn 1.x JSON; run the command by hand to inspect it.")
        }
        PackError::MissingDependency { .. } => Some("Run 'yarn install' before resolving."),
        _ => None,
    }
}

fn format_pack_error(err: &PackError) -> String {
    let mut out = format!("[ERROR] {}\n", err);
    if let Some(hint) = fix_hint(err) {
        out.push_str(&format!("  fix: {}\n", hint));
    }
    out
}

pub fn format_error(err: &anyhow::Error) -> String {
    if let Some(pack) = err.downcast_ref::<PackError>() {
        return format_pack_error(pack);
    }

    format!("[ERROR] {:#}\n", err)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let mut output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        if let Some(pack) = err.downcast_ref::<PackError>() {
            output["kind"] = serde_json::Value::from(error_kind(pack));
        }
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err));
}

fn error_kind(err: &PackError) -> &'static str {
    match err {
        PackError::Parse(_) => "parse",
        PackError::Closure(ClosureError::RootNotFound { .. }) => "root_not_found",
        PackError::Closure(ClosureError::ForbiddenDependency { .. }) => "forbidden_dependency",
        PackError::Command(CommandError::TimedOut { .. }) => "timeout",
        PackError::Command(_) => "command",
        PackError::MissingDependency { .. } => "missing_dependency",
        PackError::Config { .. } => "config",
        PackError::Io(_) => "io",
    }
}
