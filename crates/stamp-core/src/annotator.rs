//! Annotator - load, stamp, and rewrite a JSON array file
//!
//! Pipeline:
//!
//! ```text
//! file → load_text → JsonCodec::decode → Document::from_value
//!      → Document::stamp → JsonCodec::encode → write_text → file
//! ```
//!
//! Every step up to and including encoding runs before the file is opened
//! for writing, so load, parse, and shape failures leave it untouched.

use crate::codec::JsonCodec;
use crate::config::{StampConfig, WriteMode};
use crate::document::{Document, StampOutcome};
use crate::error::StampResult;
use crate::fs::{load_text, write_text};
use crate::hash::ContentHash;
use std::path::PathBuf;
use tracing::{debug, info, info_span};

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampReport {
    /// File that was rewritten
    pub path: PathBuf,
    /// Per-record counts
    pub outcome: StampOutcome,
    /// Hash of the file bytes before the run
    pub before: ContentHash,
    /// Hash of the bytes written
    pub after: ContentHash,
    /// Egress strategy used
    pub mode: WriteMode,
}

impl StampReport {
    /// Whether the file bytes differ from before the run
    #[inline]
    #[must_use]
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

/// Stamps a constant field onto every record of a JSON array file
#[derive(Debug, Clone, Default)]
pub struct Annotator {
    config: StampConfig,
    codec: JsonCodec,
}

impl Annotator {
    /// Create annotator for the given configuration
    #[inline]
    #[must_use]
    pub fn new(config: StampConfig) -> Self {
        Self {
            codec: JsonCodec::new().with_ensure_ascii(config.ensure_ascii),
            config,
        }
    }

    /// Get configuration reference
    #[inline]
    #[must_use]
    pub fn config(&self) -> &StampConfig {
        &self.config
    }

    /// Stamp JSON text in memory
    ///
    /// Returns the rendered document and the per-record counts.
    ///
    /// # Errors
    /// - `LoadError::Syntax` if `content` is not valid JSON
    /// - `ShapeError` if it is not an array of objects
    /// - `StoreError::Encode` if rendering fails
    pub fn stamp_text(&self, content: &str) -> StampResult<(String, StampOutcome)> {
        let value = self.codec.decode(content)?;
        let mut document = Document::from_value(value)?;
        let outcome = document.stamp(&self.config.field_name, &self.config.field_value);
        debug!(
            records = outcome.records,
            inserted = outcome.inserted,
            overwritten = outcome.overwritten,
            unchanged = outcome.unchanged,
            "stamped document"
        );
        let rendered = self.codec.encode(&document)?;
        Ok((rendered, outcome))
    }

    /// Run the full load / stamp / write pipeline
    ///
    /// # Errors
    /// - `ConfigError::EmptyFieldName` if the field name is empty
    /// - `LoadError` if the file is missing, unreadable, or not JSON
    /// - `ShapeError` if the JSON is not an array of objects
    /// - `StoreError` if writing the result fails
    pub fn run(&self) -> StampResult<StampReport> {
        self.config.validate()?;

        let path = &self.config.file_path;
        let span = info_span!(
            "stamp",
            path = %path.display(),
            field = %self.config.field_name,
        );
        let _guard = span.enter();

        let original = load_text(path)?;
        let before = ContentHash::compute(original.as_bytes());

        let (rendered, outcome) = self.stamp_text(&original)?;
        drop(original);

        write_text(path, &rendered, self.config.write_mode)?;
        let after = ContentHash::compute(rendered.as_bytes());

        let report = StampReport {
            path: path.clone(),
            outcome,
            before,
            after,
            mode: self.config.write_mode,
        };
        info!(
            records = outcome.records,
            modified = outcome.modified(),
            before = %before.short(),
            after = %after.short(),
            changed = report.changed(),
            "updated file"
        );
        Ok(report)
    }
}
