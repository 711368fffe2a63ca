use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_TITLE: &str = "pathguard";

/// Interactive session settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSection {
    /// Skip the "Press enter to exit" pause.
    pub auto_exit: bool,
    /// Banner printed when a session starts.
    pub title: String,
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            auto_exit: false,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawSessionSection {
    pub auto_exit: Option<bool>,
    pub title: Option<String>,
}

pub fn parse_session_section(
    raw: Option<RawSessionSection>,
    path: &Path,
) -> Result<SessionSection, ConfigError> {
    let session_raw = raw.unwrap_or_default();
    let title = session_raw
        .title
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    validate_title(&title, path)?;

    Ok(SessionSection {
        auto_exit: session_raw.auto_exit.unwrap_or(false),
        title,
    })
}

fn validate_title(title: &str, path: &Path) -> Result<(), ConfigError> {
    if !title.trim().is_empty() {
        return Ok(());
    }

    Err(ConfigError::InvalidValue {
        path: path.to_path_buf(),
        key: "session.title",
        reason: "must not be blank".into(),
    })
}
