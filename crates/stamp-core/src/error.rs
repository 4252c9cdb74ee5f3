//! Error types for json-stamp
//!
//! Provides error handling for:
//! - Load operations (file → JSON value)
//! - Shape checks (JSON value → document of records)
//! - Store operations (document → file)
//! - Configuration loading and validation

use std::path::{Path, PathBuf};

/// Errors while reading and decoding the input file (ingress)
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Input file does not exist
    #[error("file not found: {}", path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Input file exists but could not be read as UTF-8 text
    #[error("io error reading {}: {source}", path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Content is not valid JSON
    #[error("invalid JSON at line {line}, column {column}: {message}")]
    Syntax {
        /// 1-based line of the error
        line: usize,
        /// 1-based column of the error
        column: usize,
        /// Decoder message
        message: String,
    },
}

impl LoadError {
    /// Classify an IO error raised while reading `path`
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Create syntax error from a decoder failure
    #[must_use]
    pub fn syntax(err: &serde_json::Error) -> Self {
        Self::Syntax {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Parsed JSON does not have the array-of-objects shape
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// Top-level value is not an array
    #[error("expected a JSON array of objects, found {found}")]
    NotAnArray {
        /// JSON type actually found
        found: &'static str,
    },

    /// An array element is not an object
    #[error("element {index} is not an object (found {found})")]
    NotAnObject {
        /// Position of the offending element
        index: usize,
        /// JSON type actually found
        found: &'static str,
    },
}

/// Errors while rendering and writing the output file (egress)
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Document could not be rendered as JSON
    #[error("failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),

    /// IO error during file write
    #[error("io error writing {}: {source}", path.display())]
    Io {
        /// Path being written
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Sibling temp file could not be created or written; target untouched
    #[error("io error staging {}: {source}", path.display())]
    Staging {
        /// Target path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Temporary file could not be renamed over the target
    #[error("failed to replace {}: {source}", path.display())]
    Persist {
        /// Target path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create staging error for the target of an atomic write
    pub fn staging(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Staging {
            path: path.into(),
            source,
        }
    }
}

/// Errors while loading or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error reading config {}: {source}", path.display())]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has unknown keys
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Field name must not be empty
    #[error("field name must not be empty")]
    EmptyFieldName,
}

/// Combined json-stamp error
#[derive(Debug, thiserror::Error)]
pub enum StampError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl StampError {
    /// File the failure is attached to, when known
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Load(LoadError::NotFound { path } | LoadError::Io { path, .. })
            | Self::Store(
                StoreError::Io { path, .. }
                | StoreError::Staging { path, .. }
                | StoreError::Persist { path, .. },
            )
            | Self::Config(ConfigError::Read { path, .. }) => Some(path),
            _ => None,
        }
    }

    /// Whether the target file is guaranteed untouched by the failed run
    ///
    /// Everything except an in-place write failure or an atomic rename
    /// failure happens before the target is opened for writing.
    #[inline]
    #[must_use]
    pub fn left_file_untouched(&self) -> bool {
        !matches!(
            self,
            Self::Store(StoreError::Io { .. } | StoreError::Persist { .. })
        )
    }
}

/// Result type alias for json-stamp operations
pub type StampResult<T> = Result<T, StampError>;
