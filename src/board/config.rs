//! Board configuration.
//!
//! Read from a TOML file; every key is optional.
//!
//! ```toml
//! rehydration = "repair"   # or "reject"
//! seed = "demo"            # or "empty"
//! recent_limit = 5
//! snapshot_file = "taskflow-board.json"
//! ```

use crate::board::domain::RehydrationPolicy;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use thiserror::Error;

/// Default number of tasks in the recent-task list.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Default snapshot file name.
pub const DEFAULT_SNAPSHOT_FILE: &str = "taskflow-board.json";

/// Board to start from when no snapshot has been saved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedMode {
    /// Start with four empty columns.
    #[default]
    Empty,
    /// Start with the sample tasks.
    Demo,
}

/// Settings for opening and presenting a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Handling of inconsistent saved snapshots.
    pub rehydration: RehydrationPolicy,
    /// Board used when nothing has been saved.
    pub seed: SeedMode,
    /// Length of the recent-task list.
    pub recent_limit: usize,
    /// File name for the saved snapshot.
    pub snapshot_file: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rehydration: RehydrationPolicy::default(),
            seed: SeedMode::default(),
            recent_limit: DEFAULT_RECENT_LIMIT,
            snapshot_file: DEFAULT_SNAPSHOT_FILE.to_owned(),
        }
    }
}

/// Errors returned while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid TOML for [`BoardConfig`].
    #[error("invalid board configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration file could not be read.
    #[error("cannot read board configuration: {0}")]
    Io(#[from] std::io::Error),
}

impl BoardConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, unknown keys or
    /// unknown enum values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads `file_name` from `dir`, falling back to defaults when the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file exists but cannot be read,
    /// or [`ConfigError::Parse`] when its contents are invalid.
    pub fn load(dir: &Dir, file_name: &str) -> Result<Self, ConfigError> {
        match dir.read_to_string(file_name) {
            Ok(text) => {
                let config = Self::from_toml_str(&text)?;
                tracing::debug!(file_name, ?config, "board configuration loaded");
                Ok(config)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(file_name, "no board configuration file, using defaults");
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }
}
