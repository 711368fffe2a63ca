//! File and directory name sanitizing.

use std::sync::LazyLock;

use regex::Regex;

/// Characters reserved by at least one common OS (Windows being the strictest).
static RESERVED_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\/:"*?<>|]+"#).unwrap());

/// Replacement for every run of reserved characters.
pub const RESERVED_REPLACEMENT: &str = "_";

/// Turn an arbitrary string into a name that is legal on common operating systems.
///
/// The input is first rendered through its escaped debug representation so
/// control characters stay visible (`"a\nb"` becomes `a_nb`), the quotes that
/// representation adds are removed, and each run of reserved characters
/// collapses into a single `_`.
pub fn safe_name(raw: &str) -> String {
    let escaped = format!("{raw:?}");
    let unquoted = escaped
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(&escaped);

    RESERVED_RUN_RE
        .replace_all(unquoted, RESERVED_REPLACEMENT)
        .into_owned()
}

/// Returns true if `name` contains no reserved character.
pub fn is_safe_name(name: &str) -> bool {
    !RESERVED_RUN_RE.is_match(name)
}
