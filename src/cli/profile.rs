//! LaunchProfile and config path resolution.
use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::input::{InputRequest, InvocationMode};
use crate::config::{CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

/// Where the configuration file is expected and whether the user named it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    /// True for `--config` or `PATHGUARD_CONFIG_PATH`; such a file must exist.
    pub explicit: bool,
}

/// Resolved launch profile for a default (non-subcommand) run.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub config: ConfigLocation,
    pub mode: InvocationMode,
    pub request: InputRequest,
    pub auto_exit: bool,
    pub show_version: bool,
    pub launch_args: Vec<String>,
}

/// Resolve config path in the order: CLI override → env var → default.
pub fn resolve_config_path(override_path: Option<PathBuf>) -> Result<ConfigLocation> {
    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(resolve_config_path_from(
        override_path,
        env::var_os(CONFIG_ENV_KEY),
        &cwd,
    ))
}

/// Resolve config path from explicit inputs (testable helper).
fn resolve_config_path_from(
    override_path: Option<PathBuf>,
    env_value: Option<OsString>,
    cwd: &Path,
) -> ConfigLocation {
    let env_path = env_value
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);
    let (path, explicit) = match override_path.or(env_path) {
        Some(path) => (path, true),
        None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    };

    let path = if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    };
    ConfigLocation { path, explicit }
}

/// Build launch arguments suitable for reproduction/logging.
pub fn build_launch_args(request: &InputRequest, auto_exit: bool, config: &Path) -> Vec<String> {
    let mut args = Vec::new();
    if auto_exit {
        args.push("--auto-exit".to_string());
    }
    if let Some(input_dir) = &request.input_dir {
        args.push(format!("--input-dir={}", input_dir.display()));
    }
    if let Some(output_dir) = &request.output_dir {
        args.push(format!("--output-dir={}", output_dir.display()));
    }
    args.push(format!("--config={}", config.display()));
    args.extend(request.files.iter().map(|file| file.display().to_string()));
    args
}
