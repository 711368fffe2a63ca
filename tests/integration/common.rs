use std::{
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

use anyhow::{Context, Result};
use serde_json::Value;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_pathguard");

pub fn fixture(relative: &str) -> String {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    root.join(relative).display().to_string()
}

/// Run the binary from `cwd` with no inherited config override, feeding `stdin`.
pub fn run_pathguard(cwd: &Path, args: &[&str], stdin: &str) -> Result<Output> {
    let mut child = Command::new(BINARY_PATH)
        .args(args)
        .current_dir(cwd)
        .env_remove("PATHGUARD_CONFIG_PATH")
        .env("RUST_LOG", "warn")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("failed to spawn pathguard")?;

    if let Some(mut input) = child.stdin.take() {
        input
            .write_all(stdin.as_bytes())
            .context("failed to write stdin")?;
    }

    child
        .wait_with_output()
        .context("failed to collect pathguard output")
}

pub fn stdout_json(output: &Output) -> Result<Value> {
    serde_json::from_slice(&output.stdout).with_context(|| {
        format!(
            "stdout is not JSON: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

pub fn string_array(value: &Value) -> Vec<String> {
    let mut items = value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    items.sort();
    items
}
