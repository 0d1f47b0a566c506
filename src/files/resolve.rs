//! Hand history input resolution.
//!
//! Supports two input forms:
//! 1. A single file: used as-is, whatever its extension
//! 2. A directory: walked recursively for `*.txt` files

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Extension of hand history files picked up from directories.
pub const HAND_HISTORY_EXTENSION: &str = "txt";

/// Resolve an input path into the ordered list of files to process.
///
/// Directory results are sorted by path so repeated runs process hands in
/// the same order.
///
/// # Errors
///
/// Returns [`Error::Input`] if the path or any directory below it cannot be
/// read.
pub fn collect_inputs(path: &Path) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(path).map_err(|e| Error::input(path, e))?;

    if !metadata.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    walk_dir(path, &mut files)?;
    files.sort();

    debug!(path = ?path, files = files.len(), "Collected hand history files");
    Ok(files)
}

fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| Error::input(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| Error::input(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::input(&path, e))?;

        if file_type.is_dir() {
            walk_dir(&path, files)?;
        } else if is_hand_history(&path) {
            files.push(path);
        }
    }

    Ok(())
}

fn is_hand_history(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(HAND_HISTORY_EXTENSION))
}
