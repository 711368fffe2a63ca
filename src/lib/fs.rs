//! Directory enumeration for input discovery.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

/// Options controlling [`list_files_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Descend into symlinked directories and report symlinked files.
    pub follow_links: bool,
}

/// List every regular file under `root`, recursively, in filesystem order.
///
/// A missing root or a root that is not a directory yields an empty list.
pub fn list_files(root: &Path) -> Vec<PathBuf> {
    list_files_with(root, WalkOptions::default())
}

/// Same as [`list_files`] with explicit walk options.
///
/// Entries that cannot be read are skipped rather than reported.
pub fn list_files_with(root: &Path, options: WalkOptions) -> Vec<PathBuf> {
    if root.as_os_str().is_empty() || !root.is_dir() {
        debug!(
            target: "pathguard::walk",
            root = %root.display(),
            "Walk root is not a directory; nothing to list"
        );
        return Vec::new();
    }

    let files = WalkDir::new(root)
        .follow_links(options.follow_links)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!(
                    target: "pathguard::walk",
                    root = %root.display(),
                    reason = %err,
                    "Skipping unreadable entry"
                );
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect::<Vec<_>>();

    debug!(
        target: "pathguard::walk",
        root = %root.display(),
        files = files.len(),
        "Listed directory tree"
    );
    files
}
