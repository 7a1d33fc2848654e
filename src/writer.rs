//! Atomic output writes.
//!
//! Content goes to a hidden temp file next to the target, is fsynced, then
//! renamed over the target, so readers see either the old or the new file.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::SnippetError;

/// Writes `content` to `dir/file_name`, replacing any existing file.
pub fn write_atomic(dir: &Path, file_name: &str, content: &str) -> Result<PathBuf, SnippetError> {
    let target = dir.join(file_name);
    let temp_path = dir.join(format!(".{file_name}.tmp"));

    let result = write_then_rename(&temp_path, &target, content);
    if result.is_err() {
        let _ = std::fs::remove_file(&temp_path);
    }
    result
        .map(|()| target.clone())
        .map_err(|source| SnippetError::WriteFailed { target, source })
}

fn write_then_rename(temp_path: &Path, target: &Path, content: &str) -> std::io::Result<()> {
    let mut file = File::create(temp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;
    drop(file);
    std::fs::rename(temp_path, target)
}
