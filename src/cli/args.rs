//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use super::{
    build_launch_args, resolve_config_path, InputRequest, InvocationMode, LaunchProfile,
};

/// What the command line asked for: a session or a one-shot utility.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    RunSession(LaunchProfile),
    Cli(CliCommand),
}

/// Utility subcommands; none of them pause or prompt.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Replace OS-reserved characters in a name.
    Sanitize(SanitizeArgs),
    /// Join untrusted path segments under a base directory without leaving it.
    Join(JoinArgs),
    /// List every file under a directory.
    List(ListArgs),
}

/// Arguments for `sanitize`.
#[derive(Debug, Clone, Args)]
pub struct SanitizeArgs {
    /// Name to sanitize.
    #[arg(allow_hyphen_values = true)]
    pub name: String,
}

/// Arguments for `join`.
#[derive(Debug, Clone, Args)]
#[command(
    after_help = "Segments escaping BASE are flattened into one name; if that still escapes, BASE/illegal_path_traversal is printed."
)]
pub struct JoinArgs {
    /// Trusted base directory.
    pub base: PathBuf,
    /// Untrusted path segments (`\` is accepted as a separator).
    #[arg(allow_hyphen_values = true)]
    pub segments: Vec<String>,
}

/// Arguments for `list`.
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Directory to walk.
    pub dir: PathBuf,
    /// Follow symbolic links while walking.
    #[arg(long, default_value_t = false)]
    pub follow_links: bool,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pathguard",
    author,
    about = "Resolve input files and a safe output directory for file-processing tools",
    long_about = None,
    disable_version_flag = true,
    args_conflicts_with_subcommands = true
)]
pub struct LaunchArgs {
    /// Input files (ignored when --input-dir is given).
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,
    /// Skip "Press enter to exit" prompts.
    #[arg(short = 'e', long, default_value_t = false)]
    pub auto_exit: bool,
    /// Show utility name and version.
    #[arg(short = 'v', long, default_value_t = false)]
    pub version: bool,
    /// Write results to the given output directory.
    #[arg(short = 'o', long)]
    pub output_dir: Option<PathBuf>,
    /// Process every file under the given input directory.
    #[arg(short = 'i', long)]
    pub input_dir: Option<PathBuf>,
    /// Path to pathguard.toml (overrides PATHGUARD_CONFIG_PATH).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
    /// Utility subcommand; when absent a session runs.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl LaunchArgs {
    /// Build a `LaunchProfile` from CLI args and environment variables.
    ///
    /// `raw_arg_count` is the length of the process argument vector,
    /// program name included.
    pub fn build(self, raw_arg_count: usize) -> Result<LaunchProfile> {
        let config = resolve_config_path(self.config_override)?;
        let request = InputRequest {
            input_dir: self.input_dir,
            output_dir: self.output_dir,
            files: self.files,
        };
        let launch_args = build_launch_args(&request, self.auto_exit, &config.path);

        Ok(LaunchProfile {
            config,
            mode: InvocationMode::from_raw_arg_count(raw_arg_count),
            request,
            auto_exit: self.auto_exit,
            show_version: self.version,
            launch_args,
        })
    }

    /// Parse CLI args into either session mode or utility command mode.
    pub fn into_command(self, raw_arg_count: usize) -> Result<ParsedCommand> {
        match self.command.clone() {
            Some(command) => Ok(ParsedCommand::Cli(command)),
            None => Ok(ParsedCommand::RunSession(self.build(raw_arg_count)?)),
        }
    }
}
