//! Presentation and export of snapshot history
//!
//! - `table` - Plain-text table of one snapshot
//! - `csv` - One row per (hand, player) across the history
//! - `json` - The full ordered history, readable back

mod csv;
mod json;
mod table;

pub use self::csv::{write_csv, write_csv_to, CSV_HEADER};
pub use self::json::{read_json, write_json};
pub use self::table::{render_heading, render_table, TABLE_HEADER};
