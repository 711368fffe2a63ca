//! Load and validate tool configuration.
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub mod session;
pub mod telemetry;
pub mod walk;

pub use session::{parse_session_section, RawSessionSection, SessionSection, DEFAULT_TITLE};
pub use walk::{parse_walk_section, RawWalkSection, WalkSection};

pub const CONFIG_ENV_KEY: &str = "PATHGUARD_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "pathguard.toml";

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct ToolConfig {
    pub walk: WalkSection,
    pub session: SessionSection,
    pub source_path: PathBuf,
    /// False when the (optional) default file was absent and defaults apply.
    pub file_present: bool,
}

#[derive(Debug, Deserialize, Default)]
struct RawToolConfig {
    walk: Option<RawWalkSection>,
    session: Option<RawSessionSection>,
}

impl ToolConfig {
    /// Built-in defaults, as if an empty file had been read from `source_path`.
    pub fn defaults(source_path: PathBuf) -> Self {
        Self {
            walk: WalkSection::default(),
            session: SessionSection::default(),
            source_path,
            file_present: false,
        }
    }

    /// Load configuration from `path`.
    ///
    /// With `explicit` set the file must exist; otherwise a missing file
    /// yields the defaults.
    pub fn load_from_path(path: PathBuf, explicit: bool) -> Result<Self, ConfigError> {
        telemetry::log_source(&path, explicit);

        let file_present = path.is_file();
        if !explicit && !file_present {
            let config = Self::defaults(path);
            telemetry::log_loaded(&config);
            return Ok(config);
        }

        Self::read_file(&path, file_present)
            .inspect(telemetry::log_loaded)
            .inspect_err(telemetry::log_rejected)
    }

    fn read_file(path: &Path, file_present: bool) -> Result<Self, ConfigError> {
        let document = config::Config::builder()
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            )
            .build()
            .map_err(|source| ConfigError::unreadable(path, source))?;
        let raw = document
            .try_deserialize::<RawToolConfig>()
            .map_err(|source| ConfigError::malformed(path, source))?;

        Ok(Self {
            walk: parse_walk_section(raw.walk),
            session: parse_session_section(raw.session, path)?,
            source_path: path.to_path_buf(),
            file_present,
        })
    }
}
