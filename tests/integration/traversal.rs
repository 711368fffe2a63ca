//! Library-level traversal scenarios against a real directory tree.
use anyhow::Result;
use assert_fs::{prelude::*, TempDir};
use pathguard::{
    lib::paths::{guard_join, is_safe_path, JoinTier},
    list_files, resolve_real_path, safe_join, safe_name,
};

#[test]
fn extracted_entry_names_stay_inside_output() -> Result<()> {
    let temp = TempDir::new()?;
    temp.child("out").create_dir_all()?;
    let out = resolve_real_path(temp.child("out").path())?;

    let hostile = ["../../etc/passwd", "..\\..\\boot.ini", "/abs/entry", "ok/name.bin"];
    for entry in hostile {
        let joined = safe_join(&out, &[entry])?;
        assert!(
            is_safe_path(&out, &joined)?,
            "{entry} escaped to {}",
            joined.display()
        );
    }
    Ok(())
}

#[test]
fn sanitized_names_join_as_single_component() -> Result<()> {
    let temp = TempDir::new()?;
    let base = resolve_real_path(temp.path())?;

    let name = safe_name("volume: \"main\"/part*1");
    let guarded = guard_join(&base, &[name.as_str()])?;

    assert_eq!(guarded.tier, JoinTier::Contained);
    assert_eq!(guarded.path, base.join("volume_ _main_part_1"));
    Ok(())
}

#[test]
fn written_results_are_found_by_walk() -> Result<()> {
    let temp = TempDir::new()?;
    let base = resolve_real_path(temp.path())?;

    let target = safe_join(&base, &["modules", "../../escape.bin"])?;
    std::fs::create_dir_all(target.parent().unwrap_or(&base))?;
    std::fs::write(&target, b"payload")?;

    let files = list_files(&base);
    assert_eq!(files, vec![target]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn symlinked_output_escape_is_contained() -> Result<()> {
    let temp = TempDir::new()?;
    temp.child("out").create_dir_all()?;
    temp.child("outside").create_dir_all()?;
    std::os::unix::fs::symlink(temp.child("outside").path(), temp.child("out/link").path())?;
    let out = resolve_real_path(temp.child("out").path())?;

    let guarded = guard_join(&out, &["link/loot.bin"])?;

    assert_eq!(guarded.tier, JoinTier::Flattened);
    assert_eq!(guarded.path, out.join("link_loot.bin"));
    Ok(())
}
