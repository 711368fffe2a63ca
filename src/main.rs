//! Entry point for pathguard.
use std::{
    env,
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use pathguard::{
    cli::{execute_cli_command, CliCommand, LaunchArgs, LaunchProfile, ParsedCommand, StdioPrompter},
    config::ToolConfig,
    lib::{paths::executable_dir, telemetry},
    session::{self, RuntimeExit},
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let raw_arg_count = env::args_os().count();
    let args = LaunchArgs::parse();
    let command = args
        .into_command(raw_arg_count)
        .map_err(RuntimeExit::from_error)?;

    match command {
        ParsedCommand::RunSession(profile) => run_session(profile),
        ParsedCommand::Cli(command) => handle_cli_command(command),
    }
}

fn run_session(profile: LaunchProfile) -> Result<(), RuntimeExit> {
    let config = ToolConfig::load_from_path(profile.config.path.clone(), profile.config.explicit)
        .map_err(RuntimeExit::from_error)?;
    if !profile.show_version {
        eprintln!("{}", session::banner(&config));
    }

    let executable_dir = executable_dir().map_err(RuntimeExit::from_error)?;
    tracing::debug!(
        target: "pathguard::session",
        executable_dir = %executable_dir.display(),
        launch_args = ?profile.launch_args,
        "Starting session"
    );

    let stdin = io::stdin();
    let mut prompter = StdioPrompter::new(stdin.lock(), io::stderr());
    let mut stdout = io::stdout().lock();
    session::run_session(
        &profile,
        &config,
        &executable_dir,
        &mut prompter,
        &mut stdout,
    )?;
    stdout
        .flush()
        .map_err(RuntimeExit::from_error)?;
    Ok(())
}

fn handle_cli_command(command: CliCommand) -> Result<(), RuntimeExit> {
    let message = execute_cli_command(command).map_err(RuntimeExit::from_error)?;
    println!("{message}");
    Ok(())
}
