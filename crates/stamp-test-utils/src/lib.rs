//! Testing utilities for json-stamp workspace
//!
//! Shared fixtures: a JSON file inside its own temporary directory.

#![allow(missing_docs)]

use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Name used for fixture files, matching the default target
pub const FIXTURE_FILE_NAME: &str = "tickers.json";

/// A JSON file in a temporary directory, removed on drop
#[derive(Debug)]
pub struct JsonFixture {
    dir: TempDir,
    path: PathBuf,
}

impl JsonFixture {
    /// Fixture with raw text content
    pub fn with_text(text: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(FIXTURE_FILE_NAME);
        std::fs::write(&path, text).unwrap();
        Self { dir, path }
    }

    /// Fixture with a JSON value rendered compactly
    pub fn with_value(value: &Value) -> Self {
        Self::with_text(&serde_json::to_string(value).unwrap())
    }

    /// Fixture whose file does not exist yet
    pub fn missing() -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(FIXTURE_FILE_NAME);
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn read_text(&self) -> String {
        std::fs::read_to_string(&self.path).unwrap()
    }

    pub fn read_value(&self) -> Value {
        serde_json::from_str(&self.read_text()).unwrap()
    }

    /// Write a sibling file (e.g. a config) into the fixture directory
    pub fn write_sibling(&self, name: &str, text: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, text).unwrap();
        path
    }
}

/// Keys of an object value in order
pub fn object_keys(value: &Value) -> Vec<String> {
    value
        .as_object()
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default()
}
