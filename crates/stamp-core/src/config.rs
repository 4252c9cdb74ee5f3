//! Stamp configuration
//!
//! Defaults reproduce the reference invocation: `tickers.json`,
//! `assetType`, `stocks`, in-place write.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default input/output file
pub const DEFAULT_FILE_PATH: &str = "tickers.json";

/// Default field name stamped onto every record
pub const DEFAULT_FIELD_NAME: &str = "assetType";

/// Default field value stamped onto every record
pub const DEFAULT_FIELD_VALUE: &str = "stocks";

/// How the rendered document reaches the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WriteMode {
    /// Truncate the file and write in place
    #[default]
    InPlace,
    /// Write a sibling temp file, then rename it over the target
    Atomic,
}

impl std::fmt::Display for WriteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InPlace => write!(f, "in-place"),
            Self::Atomic => write!(f, "atomic"),
        }
    }
}

/// Stamp configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct StampConfig {
    /// File read and then overwritten
    pub file_path: PathBuf,
    /// Key set on every record
    pub field_name: String,
    /// String value assigned to the key
    pub field_value: String,
    /// Egress strategy
    pub write_mode: WriteMode,
    /// Escape non-ASCII characters as `\uXXXX` in the output
    pub ensure_ascii: bool,
}

impl StampConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    ///
    /// Missing keys fall back to defaults.
    ///
    /// # Errors
    /// Returns `ConfigError::Toml` on invalid TOML or unknown keys
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// - `ConfigError::Read` if the file cannot be read
    /// - `ConfigError::Toml` on invalid TOML or unknown keys
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// With file path
    #[inline]
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = path.into();
        self
    }

    /// With field name
    #[inline]
    #[must_use]
    pub fn with_field_name(mut self, name: impl Into<String>) -> Self {
        self.field_name = name.into();
        self
    }

    /// With field value
    #[inline]
    #[must_use]
    pub fn with_field_value(mut self, value: impl Into<String>) -> Self {
        self.field_value = value.into();
        self
    }

    /// With write mode
    #[inline]
    #[must_use]
    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    /// With non-ASCII escaping on or off
    #[inline]
    #[must_use]
    pub fn with_ensure_ascii(mut self, ensure_ascii: bool) -> Self {
        self.ensure_ascii = ensure_ascii;
        self
    }

    /// Check the configuration before any file is touched
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyFieldName` if the field name is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_name.is_empty() {
            return Err(ConfigError::EmptyFieldName);
        }
        Ok(())
    }
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from(DEFAULT_FILE_PATH),
            field_name: DEFAULT_FIELD_NAME.to_string(),
            field_value: DEFAULT_FIELD_VALUE.to_string(),
            write_mode: WriteMode::InPlace,
            ensure_ascii: false,
        }
    }
}
