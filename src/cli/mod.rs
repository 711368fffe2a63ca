//! Command-line front end: argument parsing, input resolution, and the utility subcommands.
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use crate::lib::{
    fs::{list_files_with, WalkOptions},
    names::safe_name,
    paths::{guard_join, resolve_real_path, to_os_separators},
};

pub mod args;
pub mod input;
pub mod profile;

pub use args::{CliCommand, JoinArgs, LaunchArgs, ListArgs, ParsedCommand, SanitizeArgs};
pub use input::{
    resolve_inputs, InputRequest, InvocationMode, Prompter, ResolvedInputs, StdioPrompter,
    EXIT_PROMPT, INPUT_DIR_PROMPT, OUTPUT_DIR_PROMPT,
};
pub use profile::{build_launch_args, resolve_config_path, ConfigLocation, LaunchProfile};

/// Run a utility subcommand and return its JSON payload.
pub fn execute_cli_command(command: CliCommand) -> Result<String> {
    match command {
        CliCommand::Sanitize(args) => sanitize_payload(&args.name),
        CliCommand::Join(args) => join_payload(&args.base, &args.segments),
        CliCommand::List(args) => list_payload(
            &args.dir,
            WalkOptions {
                follow_links: args.follow_links,
            },
        ),
    }
}

fn sanitize_payload(raw: &str) -> Result<String> {
    let payload = json!({
        "input": raw,
        "name": safe_name(raw),
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Join segments under `base` and report the tier that produced the path.
fn join_payload(base: &Path, segments: &[String]) -> Result<String> {
    let segments = segments
        .iter()
        .map(|segment| to_os_separators(segment).to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    let guarded = guard_join(base, &segments)
        .with_context(|| format!("failed to join under {}", base.display()))?;
    let resolved_base = resolve_real_path(base)
        .with_context(|| format!("failed to resolve {}", base.display()))?;

    let payload = json!({
        "base": resolved_base.to_string_lossy(),
        "segments": segments,
        "path": guarded.path.to_string_lossy(),
        "tier": guarded.tier.as_str(),
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

fn list_payload(dir: &Path, options: WalkOptions) -> Result<String> {
    let files = list_files_with(dir, options)
        .iter()
        .map(|file| file.to_string_lossy().into_owned())
        .collect::<Vec<_>>();

    let payload = json!({
        "root": dir.to_string_lossy(),
        "count": files.len(),
        "files": files,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}
