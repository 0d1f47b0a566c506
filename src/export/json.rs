//! JSON export and read-back of the snapshot history.
//!
//! Document shape:
//!
//! ```text
//! {
//!   "snapshots": [
//!     ["123", {"Alice": {"hands": 1, "VPIP%": 100.0, "AF": "-", ...}}],
//!     ...
//!   ]
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::stats::SnapshotRecord;

#[derive(Serialize)]
struct SnapshotDocumentRef<'a> {
    snapshots: &'a [SnapshotRecord],
}

#[derive(Deserialize)]
struct SnapshotDocument {
    snapshots: Vec<SnapshotRecord>,
}

/// Write the pretty-printed history to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`Error::Export`] on I/O failure and [`Error::Json`] if
/// serialization fails.
pub fn write_json(history: &[SnapshotRecord], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::export(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &SnapshotDocumentRef { snapshots: history })?;
    writer.write_all(b"\n").map_err(|e| Error::export(path, e))?;
    writer.flush().map_err(|e| Error::export(path, e))?;
    Ok(())
}

/// Read a history previously written by [`write_json`].
///
/// # Errors
///
/// Returns [`Error::Input`] if the file cannot be opened and
/// [`Error::Json`] if it is not a snapshot document.
pub fn read_json(path: &Path) -> Result<Vec<SnapshotRecord>> {
    let file = File::open(path).map_err(|e| Error::input(path, e))?;
    let document: SnapshotDocument = serde_json::from_reader(BufReader::new(file))?;
    Ok(document.snapshots)
}
