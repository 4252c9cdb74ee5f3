//! File ingress and egress
//!
//! The file is read fully and closed before it is opened for writing; no
//! handle is held across both phases and no lock is taken.

use crate::config::WriteMode;
use crate::error::{LoadError, StoreError};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Read the whole file as UTF-8 text
///
/// # Errors
/// - `LoadError::NotFound` if the path does not exist
/// - `LoadError::Io` if the file cannot be read or is not UTF-8
pub fn load_text(path: &Path) -> Result<String, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::io_error(path, e))?;
    debug!(path = %path.display(), bytes = text.len(), "read input file");
    Ok(text)
}

/// Write `text` to `path`, replacing prior contents
///
/// `WriteMode::InPlace` truncates and writes; a failure partway may leave the
/// file truncated. `WriteMode::Atomic` writes a temp file in the same
/// directory and renames it over `path`.
///
/// # Errors
/// - `StoreError::Io` if the in-place write fails
/// - `StoreError::Staging` if the atomic temp file cannot be written
/// - `StoreError::Persist` if the atomic rename fails
pub fn write_text(path: &Path, text: &str, mode: WriteMode) -> Result<(), StoreError> {
    match mode {
        WriteMode::InPlace => {
            std::fs::write(path, text).map_err(|e| StoreError::io_error(path, e))?;
        }
        WriteMode::Atomic => write_atomic(path, text)?,
    }
    debug!(path = %path.display(), bytes = text.len(), %mode, "wrote output file");
    Ok(())
}

fn write_atomic(path: &Path, text: &str) -> Result<(), StoreError> {
    // Rename replaces a symlink itself; write through to what it points at.
    let target = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp =
        tempfile::NamedTempFile::new_in(dir).map_err(|e| StoreError::staging(path, e))?;
    tmp.write_all(text.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| StoreError::staging(path, e))?;

    // Temp files are created owner-only; carry over the target's mode.
    if let Ok(meta) = std::fs::metadata(&target) {
        std::fs::set_permissions(tmp.path(), meta.permissions())
            .map_err(|e| StoreError::staging(path, e))?;
    }

    tmp.persist(&target).map_err(|e| StoreError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}
