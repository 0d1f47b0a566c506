//! Derived per-player metrics.
//!
//! Field names on the wire follow the column headers of the exports
//! (`VPIP%`, `AF`, `BB/100`, ...). Ratios are rounded when derived, so the
//! values stored in a snapshot are exactly what gets printed and exported.

use std::fmt;

use indexmap::IndexMap;

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::accumulator::PlayerRecord;

/// Printed and serialized in place of AF when a player has no post-flop calls.
pub const AF_PLACEHOLDER: &str = "-";

/// Metrics of every known player after one hand, keyed by player name in
/// the order players were first seen.
pub type Snapshot = IndexMap<String, PlayerMetrics>;

// ============================================================================
// AggressionFactor
// ============================================================================

/// (bets + raises) / calls, or undefined when there were no calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AggressionFactor {
    Ratio(f64),
    Undefined,
}

impl AggressionFactor {
    pub fn from_counts(aggressive: u32, calls: u32) -> Self {
        if calls == 0 {
            AggressionFactor::Undefined
        } else {
            AggressionFactor::Ratio(round_to(aggressive as f64 / calls as f64, 2))
        }
    }

}

impl fmt::Display for AggressionFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggressionFactor::Ratio(v) => f.write_str(&format_number(*v)),
            AggressionFactor::Undefined => f.write_str(AF_PLACEHOLDER),
        }
    }
}

impl Serialize for AggressionFactor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AggressionFactor::Ratio(v) => serializer.serialize_f64(*v),
            AggressionFactor::Undefined => serializer.serialize_str(AF_PLACEHOLDER),
        }
    }
}

impl<'de> Deserialize<'de> for AggressionFactor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AfVisitor;

        impl Visitor<'_> for AfVisitor {
            type Value = AggressionFactor;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a number or \"{}\"", AF_PLACEHOLDER)
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(AggressionFactor::Ratio(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(AggressionFactor::Ratio(v as f64))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(AggressionFactor::Ratio(v as f64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                if v == AF_PLACEHOLDER {
                    Ok(AggressionFactor::Undefined)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(v), &self))
                }
            }
        }

        deserializer.deserialize_any(AfVisitor)
    }
}

// ============================================================================
// PlayerMetrics
// ============================================================================

/// Snapshot of one player's derived statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerMetrics {
    pub hands: u32,
    #[serde(rename = "VPIP%")]
    pub vpip: f64,
    #[serde(rename = "PFR%")]
    pub pfr: f64,
    #[serde(rename = "AF")]
    pub af: AggressionFactor,
    #[serde(rename = "AFq%")]
    pub afq: f64,
    #[serde(rename = "W$SD%")]
    pub wsd: f64,
    #[serde(rename = "BB/100")]
    pub bb_per_100: f64,
}

impl PlayerMetrics {
    /// Derive metrics from raw counters. Pure: no counter is touched.
    pub fn from_record(record: &PlayerRecord) -> Self {
        let hands = record.hands;
        let aggression = &record.aggression;
        let aggressive = aggression.bet + aggression.raise;
        let afq = aggressive as f64 / (aggressive + aggression.call).max(1) as f64;

        Self {
            hands,
            vpip: percent_of_hands(record.vpip, hands),
            pfr: percent_of_hands(record.pfr, hands),
            af: AggressionFactor::from_counts(aggressive, aggression.call),
            afq: round_to(100.0 * afq, 1),
            wsd: percent_of_hands(record.won_showdown, hands),
            bb_per_100: if hands > 0 {
                round_to(record.bb_won / hands as f64 * 100.0, 2)
            } else {
                0.0
            },
        }
    }

    /// Values in export column order, formatted for display.
    pub fn columns(&self) -> [String; 7] {
        [
            self.hands.to_string(),
            format_number(self.vpip),
            format_number(self.pfr),
            self.af.to_string(),
            format_number(self.afq),
            format_number(self.wsd),
            format_number(self.bb_per_100),
        ]
    }
}

fn percent_of_hands(count: u32, hands: u32) -> f64 {
    if hands == 0 {
        return 0.0;
    }
    round_to(100.0 * count as f64 / hands as f64, 1)
}

/// Round to `places` decimals, ties to even (`6.25` -> `6.2`).
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

/// Format a metric for text output. Integral values keep one decimal
/// (`450.0`), everything else uses the shortest round-trip form.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
