use anyhow::Result;
use assert_fs::{prelude::*, TempDir};

use crate::common::{run_pathguard, stdout_json, string_array};

#[test]
fn sanitize_replaces_reserved_runs() -> Result<()> {
    let temp = TempDir::new()?;

    let output = run_pathguard(temp.path(), &["sanitize", "a<>b:c"], "")?;

    assert!(output.status.success(), "{output:?}");
    let payload = stdout_json(&output)?;
    assert_eq!(payload["input"], "a<>b:c");
    assert_eq!(payload["name"], "a_b_c");
    Ok(())
}

#[test]
fn join_accepts_backslash_separated_segments() -> Result<()> {
    let temp = TempDir::new()?;
    let base = dunce::canonicalize(temp.path())?;
    let base_arg = temp.path().display().to_string();

    let output = run_pathguard(temp.path(), &["join", &base_arg, "dump\\body.bin"], "")?;

    assert!(output.status.success(), "{output:?}");
    let payload = stdout_json(&output)?;
    assert_eq!(payload["tier"], "contained");
    assert_eq!(
        payload["path"],
        base.join("dump").join("body.bin").display().to_string()
    );
    Ok(())
}

#[test]
fn join_falls_back_for_bare_parent_segment() -> Result<()> {
    let temp = TempDir::new()?;
    let base = dunce::canonicalize(temp.path())?;
    let base_arg = temp.path().display().to_string();

    let output = run_pathguard(temp.path(), &["join", &base_arg, ".."], "")?;

    assert!(output.status.success(), "{output:?}");
    let payload = stdout_json(&output)?;
    assert_eq!(payload["tier"], "fallback");
    assert_eq!(
        payload["path"],
        base.join("illegal_path_traversal").display().to_string()
    );
    Ok(())
}

#[test]
fn list_walks_directory_tree() -> Result<()> {
    let temp = TempDir::new()?;
    temp.child("tree/one.txt").write_str("1")?;
    temp.child("tree/deep/er/two.txt").write_str("2")?;
    let root = temp.child("tree");
    let root_arg = root.path().display().to_string();

    let output = run_pathguard(temp.path(), &["list", &root_arg], "")?;

    assert!(output.status.success(), "{output:?}");
    let payload = stdout_json(&output)?;
    assert_eq!(payload["count"], 2);
    assert_eq!(
        string_array(&payload["files"]),
        vec![
            root.path().join("deep").join("er").join("two.txt").display().to_string(),
            root.path().join("one.txt").display().to_string(),
        ]
    );
    Ok(())
}

#[test]
fn unknown_flag_is_a_usage_error() -> Result<()> {
    let temp = TempDir::new()?;

    let output = run_pathguard(temp.path(), &["--no-such-flag"], "")?;

    assert_eq!(output.status.code(), Some(2), "{output:?}");
    Ok(())
}
