//! Path resolution and traversal containment for user-supplied paths.

use std::{
    env, fs, io,
    path::{Component, Path, PathBuf, MAIN_SEPARATOR, MAIN_SEPARATOR_STR},
};

use tracing::{debug, warn};

use crate::lib::{errors::PathError, names::safe_name};

/// File name returned under the base directory when no mitigation succeeds.
pub const TRAVERSAL_FALLBACK_NAME: &str = "illegal_path_traversal";

/// Returns true if the path is non-empty and absolute.
pub fn is_nonempty_absolute(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_absolute()
}

/// Symlinks followed by hand before resolution gives up (Linux `MAXSYMLINKS`).
const MAX_SYMLINK_HOPS: u32 = 40;

/// Resolve `path` into an absolute path with symlinks and `.`/`..` removed.
///
/// Relative paths are taken against the current directory. The path does not
/// need to exist: components past the first missing one are kept as written
/// (after collapsing `.`/`..`). A symlink whose target is missing is still
/// followed to that target. Only unexpected filesystem failures, such as
/// permission errors on an ancestor, are reported.
pub fn resolve_real_path(path: &Path) -> Result<PathBuf, PathError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map_err(|source| PathError::filesystem(path, source))?
            .join(path)
    };

    let mut hops = 0;
    resolve_absolute(&absolute, &mut hops)
}

fn resolve_absolute(absolute: &Path, hops: &mut u32) -> Result<PathBuf, PathError> {
    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                resolved.push(name);
                match dunce::canonicalize(&resolved) {
                    Ok(canonical) => resolved = canonical,
                    Err(err) if is_missing(&err) => {
                        if let Some(target) = dangling_link_target(&resolved)? {
                            *hops += 1;
                            if *hops > MAX_SYMLINK_HOPS {
                                return Err(PathError::filesystem(
                                    resolved,
                                    io::Error::other("too many levels of symbolic links"),
                                ));
                            }
                            resolved = resolve_absolute(&target, hops)?;
                        }
                    }
                    Err(source) => return Err(PathError::filesystem(resolved, source)),
                }
            }
        }
    }

    Ok(resolved)
}

/// Absolute target of `path` when it is a symlink pointing at nothing.
///
/// `path` is expected to have a canonical parent.
fn dangling_link_target(path: &Path) -> Result<Option<PathBuf>, PathError> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if is_missing(&err) => return Ok(None),
        Err(source) => return Err(PathError::filesystem(path, source)),
    };
    if !metadata.file_type().is_symlink() {
        return Ok(None);
    }

    let target = fs::read_link(path).map_err(|source| PathError::filesystem(path, source))?;
    debug!(
        target: "pathguard::guard",
        link = %path.display(),
        target = %target.display(),
        "Following symlink to a missing target"
    );
    Ok(Some(match path.parent() {
        Some(parent) if target.is_relative() => parent.join(target),
        _ => target,
    }))
}

fn is_missing(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

/// Concatenate `base`, the OS separator and `user`, then collapse `.`/`..`.
///
/// This is a string join: an absolute `user` nests under `base` instead of
/// replacing it. `..` never climbs above the filesystem root.
pub fn normalize_joined(base: &Path, user: &str) -> PathBuf {
    let mut raw = base.as_os_str().to_os_string();
    raw.push(MAIN_SEPARATOR_STR);
    raw.push(user);
    normalize_lexically(Path::new(&raw))
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(Component::ParentDir),
            },
            other => normalized.push(other),
        }
    }
    normalized
}

/// Returns true if `target` resolves to `base` or to something beneath it.
pub fn is_safe_path(base: &Path, target: &Path) -> Result<bool, PathError> {
    let base = resolve_real_path(base)?;
    let target = resolve_real_path(target)?;
    Ok(target.starts_with(&base))
}

/// Which containment tier produced a [`GuardedPath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinTier {
    /// The user path stayed inside the base as written.
    Contained,
    /// The user path escaped and was flattened into one sanitized name.
    Flattened,
    /// Flattening still escaped; the fixed fallback name was used.
    Fallback,
}

impl JoinTier {
    pub const fn as_str(&self) -> &'static str {
        match self {
            JoinTier::Contained => "contained",
            JoinTier::Flattened => "flattened",
            JoinTier::Fallback => "fallback",
        }
    }
}

/// Result of [`guard_join`]: a path inside the base plus how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardedPath {
    pub path: PathBuf,
    pub tier: JoinTier,
}

/// Join untrusted `user_segments` under `base`, never leaving `base`.
///
/// The segments are joined with the OS separator. When the result escapes the
/// canonical base (via `..`, symlinks, ...), the whole user string is
/// flattened into a single name with [`safe_name`] and joined again; all
/// nested structure is lost at that point. If even that escapes, the result
/// is `base/illegal_path_traversal`.
pub fn safe_join<S: AsRef<str>>(base: &Path, user_segments: &[S]) -> Result<PathBuf, PathError> {
    guard_join(base, user_segments).map(|guarded| guarded.path)
}

/// Same as [`safe_join`], also reporting which tier produced the path.
pub fn guard_join<S: AsRef<str>>(
    base: &Path,
    user_segments: &[S],
) -> Result<GuardedPath, PathError> {
    let base = resolve_real_path(base)?;
    let user_path = user_segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(MAIN_SEPARATOR_STR);

    let target = normalize_joined(&base, &user_path);
    if is_safe_path(&base, &target)? {
        debug!(
            target: "pathguard::guard",
            base = %base.display(),
            path = %target.display(),
            "User path stays inside base directory"
        );
        return Ok(GuardedPath {
            path: target,
            tier: JoinTier::Contained,
        });
    }

    let flattened = normalize_joined(&base, &safe_name(&user_path));
    if is_safe_path(&base, &flattened)? {
        warn!(
            target: "pathguard::guard",
            base = %base.display(),
            user_path = %user_path,
            path = %flattened.display(),
            "User path escaped base directory; flattened into a single name"
        );
        return Ok(GuardedPath {
            path: flattened,
            tier: JoinTier::Flattened,
        });
    }

    let fallback = base.join(TRAVERSAL_FALLBACK_NAME);
    warn!(
        target: "pathguard::guard",
        base = %base.display(),
        user_path = %user_path,
        path = %fallback.display(),
        "User path still escaped after flattening; using fallback name"
    );
    Ok(GuardedPath {
        path: fallback,
        tier: JoinTier::Fallback,
    })
}

/// Directory containing the running executable, symlinks resolved.
pub fn executable_dir() -> Result<PathBuf, PathError> {
    let exe = env::current_exe().map_err(|source| PathError::CurrentExe { source })?;
    let exe = resolve_real_path(&exe)?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| exe.clone()))
}

/// Resolve a directory given on the command line or at a prompt.
///
/// Empty input means the executable directory; relative input is taken
/// against it; absolute input is used as given.
pub fn resolve_user_dir(user: Option<&Path>, executable_dir: &Path) -> PathBuf {
    match user {
        None => executable_dir.to_path_buf(),
        Some(path) if path.as_os_str().is_empty() => executable_dir.to_path_buf(),
        Some(path) if is_nonempty_absolute(path) => path.to_path_buf(),
        Some(path) => executable_dir.join(path),
    }
}

/// Convert `\`-separated input into a path using the host separator.
pub fn to_os_separators(path: &str) -> PathBuf {
    PathBuf::from(path.replace('\\', &MAIN_SEPARATOR.to_string()))
}
