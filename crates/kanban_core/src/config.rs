//! Board runtime configuration.
//!
//! # Responsibility
//! - Collect tunables for persistence, drag behavior and logging.
//! - Load them from TOML with per-field defaults.
//!
//! # Invariants
//! - An empty document yields `BoardConfig::default()`.
//! - `storage_key` is never blank after loading.

use crate::drag::engine::AbandonPolicy;
use crate::drag::sensor::{PointerActivation, TouchActivation};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Key the board snapshot is persisted under.
pub const STORAGE_KEY: &str = "kanban-board-state";

/// Errors from configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// Document is not valid TOML for `BoardConfig`.
    Parse(toml::de::Error),
    /// `storage_key` is blank.
    BlankStorageKey,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid board config: {err}"),
            Self::BlankStorageKey => write!(f, "storage_key must not be blank"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::BlankStorageKey => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Key-value store key for the board snapshot.
    pub storage_key: String,
    /// What happens to preview reorders when a gesture ends without a target.
    pub abandon_policy: AbandonPolicy,
    pub pointer_activation: PointerActivation,
    pub touch_activation: TouchActivation,
    /// Log level passed to `init_logging`; `None` uses the build default.
    pub log_level: Option<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            abandon_policy: AbandonPolicy::default(),
            pointer_activation: PointerActivation::default(),
            touch_activation: TouchActivation::default(),
            log_level: None,
        }
    }
}

impl BoardConfig {
    /// Parses a TOML document; absent fields take their defaults.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(document)?;
        if config.storage_key.trim().is_empty() {
            return Err(ConfigError::BlankStorageKey);
        }
        Ok(config)
    }

    /// Reads and parses a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&document)
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardConfig, ConfigError, STORAGE_KEY};
    use crate::drag::engine::AbandonPolicy;

    #[test]
    fn empty_document_uses_defaults() {
        let config = BoardConfig::from_toml_str("").unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.storage_key, STORAGE_KEY);
        assert_eq!(config.abandon_policy, AbandonPolicy::KeepPreview);
    }

    #[test]
    fn partial_document_overrides_selected_fields() {
        let config = BoardConfig::from_toml_str(
            r#"
            abandon_policy = "rollback"

            [touch_activation]
            delay_ms = 400
            "#,
        )
        .unwrap();
        assert_eq!(config.abandon_policy, AbandonPolicy::Rollback);
        assert_eq!(config.touch_activation.delay_ms, 400);
        assert_eq!(config.touch_activation.tolerance, 5.0);
        assert_eq!(config.pointer_activation.distance, 5.0);
    }

    #[test]
    fn blank_storage_key_is_rejected() {
        let err = BoardConfig::from_toml_str("storage_key = \"  \"").unwrap_err();
        assert!(matches!(err, ConfigError::BlankStorageKey));
    }
}
