use std::{io::Write, path::Path, process::ExitCode};

use anyhow::{Context, Error};
use serde::Serialize;
use tracing::debug;

use crate::{
    cli::{resolve_inputs, LaunchProfile, Prompter, EXIT_PROMPT},
    config::ToolConfig,
    lib::telemetry::{emit_inputs_resolved, InputsTelemetry},
};

/// Exit code used when a session fails, matching the "crashed" code of the
/// extractor scripts that drive this tool.
pub const CRASH_EXIT_CODE: u8 = 127;

/// Bundles a runtime error message with an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: u8,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: CRASH_EXIT_CODE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("Error: {}", self.message);
        ExitCode::from(self.exit_code)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// JSON summary printed when a session resolves its inputs.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SessionReport {
    pub mode: &'static str,
    pub input_files: Vec<String>,
    pub input_count: usize,
    pub output_dir: String,
}

/// What a session did before returning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    VersionShown,
    Completed(SessionReport),
}

/// Banner line shown at startup and by `--version`.
pub fn banner(config: &ToolConfig) -> String {
    format!("{} v{}", config.session.title, env!("CARGO_PKG_VERSION"))
}

/// Run one session: resolve inputs, print the JSON report to `out`, then
/// pause for enter unless auto-exit is set by flag or config.
pub fn run_session(
    profile: &LaunchProfile,
    config: &ToolConfig,
    executable_dir: &Path,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<SessionOutcome, RuntimeExit> {
    if profile.show_version {
        writeln!(out, "{}", banner(config))
            .context("failed to write version banner")
            .map_err(RuntimeExit::from_error)?;
        return Ok(SessionOutcome::VersionShown);
    }

    let resolved = resolve_inputs(
        profile.mode,
        &profile.request,
        executable_dir,
        config.walk.options(),
        prompter,
    )
    .map_err(RuntimeExit::from_error)?;

    let report = SessionReport {
        mode: profile.mode.as_str(),
        input_count: resolved.input_files.len(),
        input_files: resolved
            .input_files
            .iter()
            .map(|file| file.to_string_lossy().into_owned())
            .collect(),
        output_dir: resolved.output_dir.to_string_lossy().into_owned(),
    };

    emit_inputs_resolved(&InputsTelemetry {
        mode: report.mode,
        input_count: report.input_count,
        output_dir: &report.output_dir,
        executable_dir: executable_dir.to_string_lossy().as_ref(),
    });

    serde_json::to_writer_pretty(&mut *out, &report)
        .context("failed to write session report")
        .map_err(RuntimeExit::from_error)?;
    writeln!(out)
        .context("failed to write session report")
        .map_err(RuntimeExit::from_error)?;

    if !(profile.auto_exit || config.session.auto_exit) {
        if let Err(err) = prompter.ask(EXIT_PROMPT) {
            debug!(
                target: "pathguard::session",
                reason = %err,
                "Exit pause skipped"
            );
        }
    }

    Ok(SessionOutcome::Completed(report))
}
