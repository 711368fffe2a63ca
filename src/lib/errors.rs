use std::{
    io,
    path::{Path, PathBuf},
};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Why a `pathguard.toml` could not be turned into a [`ToolConfig`].
///
/// [`ToolConfig`]: crate::config::ToolConfig
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    #[error("Config {path} does not match the expected layout: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    #[error("Config {path}: `{key}` {reason}")]
    InvalidValue {
        path: PathBuf,
        key: &'static str,
        reason: String,
    },
}

impl ConfigError {
    pub fn unreadable(path: impl Into<PathBuf>, source: ConfigLoaderError) -> Self {
        Self::Unreadable {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, source: ConfigLoaderError) -> Self {
        Self::Malformed {
            path: path.into(),
            source,
        }
    }

    /// File the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Unreadable { path, .. }
            | Self::Malformed { path, .. }
            | Self::InvalidValue { path, .. } => path,
        }
    }
}

/// Failures raised while resolving paths against the filesystem.
///
/// Traversal attempts are not represented here: the guard mitigates them
/// instead of failing.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("Failed to resolve {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to locate the running executable: {source}")]
    CurrentExe {
        #[source]
        source: io::Error,
    },
}

impl PathError {
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}

/// Errors produced while turning CLI or interactive input into work items.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read answer for `{prompt}`: {source}")]
    Prompt {
        prompt: &'static str,
        #[source]
        source: io::Error,
    },
}
