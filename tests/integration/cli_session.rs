use anyhow::Result;
use assert_fs::{prelude::*, TempDir};

use crate::common::{fixture, run_pathguard, stdout_json, string_array};

#[test]
fn input_dir_lists_nested_files_and_defaults_output() -> Result<()> {
    let temp = TempDir::new()?;
    temp.child("in/rom.bin").write_binary(b"rom")?;
    temp.child("in/nested/vol.img").write_binary(b"vol")?;
    temp.child("in/empty").create_dir_all()?;
    let input = temp.child("in");
    let input_arg = input.path().display().to_string();

    let output = run_pathguard(temp.path(), &["-e", "-i", &input_arg], "")?;

    assert!(output.status.success(), "{output:?}");
    let report = stdout_json(&output)?;
    assert_eq!(report["mode"], "cli");
    assert_eq!(report["input_count"], 2);
    assert_eq!(
        string_array(&report["input_files"]),
        vec![
            input.path().join("nested").join("vol.img").display().to_string(),
            input.path().join("rom.bin").display().to_string(),
        ]
    );
    assert_eq!(report["output_dir"], input_arg);
    Ok(())
}

#[test]
fn listed_files_are_kept_in_order() -> Result<()> {
    let temp = TempDir::new()?;
    temp.child("b.bin").write_binary(b"b")?;
    temp.child("a.bin").write_binary(b"a")?;
    let out_arg = temp.child("out").path().display().to_string();
    let b = temp.child("b.bin").path().display().to_string();
    let a = temp.child("a.bin").path().display().to_string();

    let output = run_pathguard(temp.path(), &["-e", "-o", &out_arg, &b, &a], "")?;

    assert!(output.status.success(), "{output:?}");
    let report = stdout_json(&output)?;
    assert_eq!(report["input_files"], serde_json::json!([b, a]));
    assert_eq!(report["output_dir"], out_arg);
    Ok(())
}

#[test]
fn version_flag_prints_banner_to_stdout() -> Result<()> {
    let temp = TempDir::new()?;

    let output = run_pathguard(temp.path(), &["--version"], "")?;

    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("pathguard v{}\n", env!("CARGO_PKG_VERSION"))
    );
    Ok(())
}

#[test]
fn config_title_appears_in_banner() -> Result<()> {
    let temp = TempDir::new()?;
    let config = fixture("tests/fixtures/pathguard_valid.toml");

    let output = run_pathguard(temp.path(), &["--config", &config, "-v"], "")?;

    assert!(output.status.success(), "{output:?}");
    assert!(
        String::from_utf8_lossy(&output.stdout).starts_with("BIOS image unpacker v"),
        "{output:?}"
    );
    Ok(())
}

#[test]
fn missing_explicit_config_exits_with_crash_code() -> Result<()> {
    let temp = TempDir::new()?;
    let missing = temp.child("absent.toml").path().display().to_string();

    let output = run_pathguard(temp.path(), &["--config", &missing, "-e"], "")?;

    assert_eq!(output.status.code(), Some(127), "{output:?}");
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("Error:"),
        "{output:?}"
    );
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn interactive_mode_reads_directories_from_stdin() -> Result<()> {
    let temp = TempDir::new()?;
    temp.child("in/bios.cap").write_binary(b"cap")?;
    let input = temp.child("in").path().display().to_string();
    let out = temp.child("out").path().display().to_string();

    let output = run_pathguard(temp.path(), &[], &format!("{input}\n{out}\n\n"))?;

    assert!(output.status.success(), "{output:?}");
    let report = stdout_json(&output)?;
    assert_eq!(report["mode"], "interactive");
    assert_eq!(
        string_array(&report["input_files"]),
        vec![temp.child("in/bios.cap").path().display().to_string()]
    );
    assert_eq!(report["output_dir"], out);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Enter input directory path"), "{stderr}");
    assert!(stderr.contains("Enter output directory path"), "{stderr}");
    assert!(stderr.contains("Press enter to exit"), "{stderr}");
    Ok(())
}

#[test]
fn interactive_mode_with_closed_stdin_fails() -> Result<()> {
    let temp = TempDir::new()?;

    let output = run_pathguard(temp.path(), &[], "")?;

    assert_eq!(output.status.code(), Some(127), "{output:?}");
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn exit_pause_tolerates_closed_stdin() -> Result<()> {
    let temp = TempDir::new()?;
    temp.child("in/a.bin").write_binary(b"a")?;
    let input = temp.child("in").path().display().to_string();

    let output = run_pathguard(temp.path(), &["-i", &input], "")?;

    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout_json(&output)?["input_count"], 1);
    Ok(())
}
