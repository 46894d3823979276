//! Editor configuration.
//!
//! # Responsibility
//! - Hold tunables for autosave, the unload guard, seeding and logging.
//! - Load them from JSON with per-field defaults.
//!
//! # Invariants
//! - A loaded config always has a positive autosave interval.
//! - `seed_documents` never exceeds `MAX_SEED_DOCUMENTS`.

use crate::autosave::DEFAULT_AUTOSAVE_INTERVAL_MS;
use crate::logging::default_log_level;
use crate::store::document_store::DEFAULT_SEED_DOCUMENTS;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Window title suffix appended to a user-entered title.
pub const DEFAULT_WINDOW_TITLE_SUFFIX: &str = " - Document Editor";
/// Age after which unsaved content triggers the leave-page warning.
pub const DEFAULT_UNSAVED_WARNING_WINDOW_MS: i64 = 5_000;
/// Upper bound for `seed_documents`.
pub const MAX_SEED_DOCUMENTS: usize = 100;

/// Runtime settings for one editor instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub autosave_interval_ms: i64,
    pub unsaved_warning_window_ms: i64,
    pub seed_documents: usize,
    pub window_title_suffix: String,
    pub log_level: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            autosave_interval_ms: DEFAULT_AUTOSAVE_INTERVAL_MS,
            unsaved_warning_window_ms: DEFAULT_UNSAVED_WARNING_WINDOW_MS,
            seed_documents: DEFAULT_SEED_DOCUMENTS,
            window_title_suffix: DEFAULT_WINDOW_TITLE_SUFFIX.to_string(),
            log_level: default_log_level().to_string(),
        }
    }
}

/// Configuration load failure.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    Io(std::io::Error),
    /// Config text is not valid JSON for `EditorConfig`.
    Parse(serde_json::Error),
    /// Parsed values violate a constraint.
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
            Self::Invalid(details) => write!(f, "invalid config: {details}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl EditorConfig {
    /// Parses a JSON document; missing fields take their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.autosave_interval_ms <= 0 {
            return Err(ConfigError::Invalid(format!(
                "autosave_interval_ms must be positive, got {}",
                self.autosave_interval_ms
            )));
        }
        if self.seed_documents > MAX_SEED_DOCUMENTS {
            return Err(ConfigError::Invalid(format!(
                "seed_documents must be at most {MAX_SEED_DOCUMENTS}, got {}",
                self.seed_documents
            )));
        }
        if self.unsaved_warning_window_ms < 0 {
            return Err(ConfigError::Invalid(format!(
                "unsaved_warning_window_ms must not be negative, got {}",
                self.unsaved_warning_window_ms
            )));
        }
        Ok(())
    }
}
