//! Runtime settings for the menu board binary.
//!
//! Settings come from three places, later ones winning: built-in defaults,
//! an optional JSON file, and command-line flags.

use crate::domain::Role;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Effective settings after all sources are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Role the session starts in
    pub initial_role: Role,
    /// Where to write logs; logging is off when unset
    pub log_file: Option<PathBuf>,
    /// tracing filter directives, e.g. `info,menuboard=debug`
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_role: Role::Chef,
            log_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// On-disk form of [`Settings`]; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileSettings {
    pub initial_role: Option<Role>,
    pub log_file: Option<PathBuf>,
    pub log_filter: Option<String>,
}

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub initial_role: Option<Role>,
    pub log_file: Option<PathBuf>,
    pub log_filter: Option<String>,
}

impl FileSettings {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Settings {
    /// Merges defaults, the optional config file and command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file was given but cannot be read or parsed.
    pub fn resolve(config_path: Option<&Path>, overrides: SettingsOverrides) -> Result<Self, ConfigError> {
        let file = match config_path {
            Some(path) => FileSettings::load(path)?,
            None => FileSettings::default(),
        };
        Ok(Self::merge(file, overrides))
    }

    pub fn merge(file: FileSettings, overrides: SettingsOverrides) -> Self {
        let defaults = Self::default();
        Self {
            initial_role: overrides
                .initial_role
                .or(file.initial_role)
                .unwrap_or(defaults.initial_role),
            log_file: overrides.log_file.or(file.log_file),
            log_filter: overrides
                .log_filter
                .or(file.log_filter)
                .unwrap_or(defaults.log_filter),
        }
    }
}
