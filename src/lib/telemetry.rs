//! Telemetry initialization and session logging helpers.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Payload describing the inputs a session resolved.
#[derive(Debug)]
pub struct InputsTelemetry<'a> {
    pub mode: &'a str,
    pub input_count: usize,
    pub output_dir: &'a str,
    pub executable_dir: &'a str,
}

/// Emit resolved session inputs to `tracing`.
pub fn emit_inputs_resolved(telemetry: &InputsTelemetry<'_>) {
    info!(
        target: "pathguard::session",
        mode = telemetry.mode,
        input_count = telemetry.input_count,
        output_dir = telemetry.output_dir,
        executable_dir = telemetry.executable_dir,
        "Resolved session inputs"
    );
}
