//! CSV export of the snapshot history.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::stats::SnapshotRecord;

pub const CSV_HEADER: [&str; 9] = [
    "hand_id", "player", "hands", "VPIP%", "PFR%", "AF", "AFq%", "W$SD%", "BB/100",
];

/// Write one row per (snapshot, player) to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`Error::Export`] if the file cannot be created and
/// [`Error::Csv`] if writing fails part way. A partially written file is
/// left in place.
pub fn write_csv(history: &[SnapshotRecord], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::export(path, e))?;
    write_csv_to(history, file)
}

/// Write the CSV export to any writer.
pub fn write_csv_to<W: Write>(history: &[SnapshotRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    for record in history {
        for (name, metrics) in &record.players {
            let columns = metrics.columns();
            let row = [record.hand_id.as_str(), name.as_str()]
                .into_iter()
                .chain(columns.iter().map(String::as_str));
            wtr.write_record(row)?;
        }
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}
