//! Console table rendering.

use unicode_width::UnicodeWidthStr;

use crate::stats::{Accumulation, Snapshot};

/// Column titles, in display order.
pub const TABLE_HEADER: [&str; 8] = [
    "Player", "Hands", "VPIP%", "PFR%", "AF", "AFq%", "W$SD%", "BB/100",
];

const SEPARATOR: &str = " | ";
const RULE_WIDTH: usize = 65;
const NAME_WIDTH: usize = 15;
/// Minimum widths of the numeric columns, right-aligned.
const VALUE_WIDTHS: [usize; 7] = [5, 5, 5, 4, 5, 5, 6];

/// Title line printed above the table, naming the accumulation mode.
pub fn render_heading(window_hands: usize, accumulation: Accumulation) -> String {
    match accumulation {
        Accumulation::Lifetime => format!(
            "=== Table Dynamics Snapshot (lifetime, window {} hands) ===",
            window_hands
        ),
        Accumulation::Sliding => format!(
            "=== Table Dynamics Snapshot (last {} hands, sliding) ===",
            window_hands
        ),
    }
}

/// Render one snapshot as a table, one row per player in first-seen order.
///
/// With `focus` set only that player's row is shown; an unknown name
/// renders the header alone.
pub fn render_table(snapshot: &Snapshot, focus: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str(&TABLE_HEADER.join(SEPARATOR));
    out.push('\n');
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    let rows = snapshot
        .iter()
        .filter(|(name, _)| focus.map_or(true, |f| f == name.as_str()));

    for (name, metrics) in rows {
        let mut cells = vec![pad_right(name, NAME_WIDTH)];
        for (value, width) in metrics.columns().iter().zip(VALUE_WIDTHS) {
            cells.push(pad_left(value, width));
        }
        out.push_str(&cells.join(SEPARATOR));
        out.push('\n');
    }

    out
}

fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(fill), s)
}
