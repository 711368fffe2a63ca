use tracing::{debug, error, info};

use super::{ToolConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};
use crate::lib::errors::ConfigError;

pub fn log_source(path: &std::path::Path, explicit: bool) {
    if explicit {
        info!(
            target: "pathguard::config",
            path = %path.display(),
            "Loading configuration from explicit path"
        );
    } else {
        debug!(
            target: "pathguard::config",
            path = %path.display(),
            env = CONFIG_ENV_KEY,
            default = DEFAULT_CONFIG_PATH,
            "No configuration path given; trying default pathguard.toml"
        );
    }
}

pub fn log_loaded(config: &ToolConfig) {
    info!(
        target: "pathguard::config",
        path = %config.source_path.display(),
        file_present = config.file_present,
        follow_links = config.walk.follow_links,
        auto_exit = config.session.auto_exit,
        "Configuration resolved"
    );
}

pub fn log_rejected(err: &ConfigError) {
    error!(
        target: "pathguard::config",
        path = %err.path().display(),
        reason = %err,
        "Configuration rejected"
    );
}
