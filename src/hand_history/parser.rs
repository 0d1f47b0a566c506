//! Hand block parser.
//!
//! Turns the trimmed lines of one hand block into a [`Hand`]. The parser is
//! deliberately forgiving: every field except the hand id and the seated
//! players is best-effort, and a block missing either of those two is
//! discarded without an error.
//!
//! Every line is checked independently for each kind of information:
//!
//! | Field     | Source line                                             |
//! |-----------|---------------------------------------------------------|
//! | id        | first line, `PokerStars Hand #<digits>:`                |
//! | timestamp | first line containing `UTC`                             |
//! | players   | `Seat N: <name> (<stack> in chips)`, later lines win    |
//! | actions   | `<player>: ...` with folds/calls/bets/raises/checks     |
//! | winner    | first line with `collected` and `from pot`              |
//! | pot size  | first line with `Total pot <amount>`                    |

use chrono::{DateTime, NaiveDateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{Action, Hand, Street};

const HAND_ID_PREFIX: &str = "PokerStars Hand #";
const SEAT_PREFIX: &str = "Seat ";
const UTC_MARKER: &str = "UTC";
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";
const ACTION_VERBS: [&str; 5] = ["folds", "calls", "bets", "raises", "checks"];
const TOTAL_POT: &str = "Total pot";

/// How actions are assigned to streets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StreetTracking {
    // Nothing carries over between lines, so in ordinary logs every action
    // is classified as preflop.
    /// Post-flop only when a street header shares the action's line.
    #[default]
    Line,
    // The cursor advances on each `*** FLOP/TURN/RIVER/SHOW DOWN ***` header.
    /// Follow street headers through the hand.
    Hand,
}

/// Parser for single hand blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandParser {
    street_tracking: StreetTracking,
}

impl HandParser {
    pub fn new(street_tracking: StreetTracking) -> Self {
        Self { street_tracking }
    }

    /// Parse one block. Returns `None` when the block has no recognizable
    /// hand id or no seated players.
    pub fn parse<S: AsRef<str>>(&self, lines: &[S]) -> Option<Hand> {
        let Some(first) = lines.first() else {
            trace!("Skipping empty block");
            return None;
        };
        let first = first.as_ref();

        let Some(id) = parse_hand_id(first) else {
            debug!(line = first, "Discarding block without hand id");
            return None;
        };

        let mut timestamp = None;
        let mut timestamp_seen = false;
        let mut players = IndexMap::new();
        let mut actions = Vec::new();
        let mut winner = None;
        let mut pot_size = None;
        let mut current_street = Street::Preflop;

        for line in lines.iter().map(|line| line.as_ref()) {
            if !timestamp_seen && line.contains(UTC_MARKER) && line.contains(':') {
                timestamp_seen = true;
                timestamp = parse_timestamp(line);
                if timestamp.is_none() {
                    trace!(hand_id = %id, line, "Unparseable timestamp");
                }
            }

            if let Some((name, stack)) = parse_seat(line) {
                players.insert(name, stack);
            }

            let header = Street::from_header(line);
            if let Some(street) = header {
                current_street = street;
            }

            if is_action_line(line) {
                if let Some((player, text)) = line.split_once(':') {
                    let street = match self.street_tracking {
                        StreetTracking::Line => header.unwrap_or(Street::Preflop),
                        StreetTracking::Hand => current_street,
                    };
                    actions.push(Action::new(street, player.trim(), text.trim()));
                }
            }

            if winner.is_none() {
                winner = parse_winner(line);
            }

            if pot_size.is_none() {
                pot_size = parse_total_pot(line);
            }
        }

        if players.is_empty() {
            debug!(hand_id = %id, "Discarding hand without seated players");
            return None;
        }

        Some(Hand {
            id,
            timestamp,
            players,
            actions,
            winner,
            pot_size: pot_size.unwrap_or(0.0),
        })
    }
}

/// Parse a block with line-local street classification.
pub fn parse_hand<S: AsRef<str>>(lines: &[S]) -> Option<Hand> {
    HandParser::default().parse(lines)
}

fn parse_hand_id(line: &str) -> Option<String> {
    let rest = line.strip_prefix(HAND_ID_PREFIX)?;
    let (id, _) = rest.split_once(':')?;
    let is_numeric = !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit());
    is_numeric.then(|| id.to_string())
}

/// Reads the `date time` pair directly in front of the `UTC` marker, so both
/// a bare `2024/01/05 18:30:00 UTC` line and a full header line work.
fn parse_timestamp(line: &str) -> Option<DateTime<Utc>> {
    let (before, _) = line.split_once(UTC_MARKER)?;
    let mut tokens = before.split_whitespace().rev();
    let time = tokens.next()?;
    let date = tokens.next()?.trim_start_matches(['[', '(']);

    NaiveDateTime::parse_from_str(&format!("{} {}", date, time), TIMESTAMP_FORMAT)
        .ok()
        .map(|dt| dt.and_utc())
}

fn parse_seat(line: &str) -> Option<(String, f64)> {
    let rest = line.strip_prefix(SEAT_PREFIX)?;
    let (seat, rest) = rest.split_once(": ")?;
    if seat.is_empty() || !seat.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (name, rest) = rest.split_once('(')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let (stack, rest) = leading_amount(rest)?;
    rest.trim_start()
        .starts_with("in chips")
        .then(|| (name.to_string(), stack))
}

fn is_action_line(line: &str) -> bool {
    line.contains(':') && ACTION_VERBS.iter().any(|verb| line.contains(verb))
}

fn parse_winner(line: &str) -> Option<String> {
    if !line.contains("from pot") {
        return None;
    }
    let (name, _) = line.split_once("collected")?;
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

fn parse_total_pot(line: &str) -> Option<f64> {
    let (_, rest) = line.split_once(TOTAL_POT)?;
    leading_amount(rest).map(|(amount, _)| amount)
}

/// Parse a non-negative amount at the start of `s`, skipping whitespace and
/// a currency symbol. Returns the amount and the unparsed remainder.
fn leading_amount(s: &str) -> Option<(f64, &str)> {
    let s = s.trim_start().trim_start_matches(['$', '€', '£']);
    let end = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(s.len());
    let amount = s[..end].parse::<f64>().ok()?;
    Some((amount, &s[end..]))
}
