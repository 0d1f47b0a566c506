//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::hand_history::StreetTracking;
use crate::stats::{Accumulation, DEFAULT_BIG_BLIND, DEFAULT_WINDOW_HANDS};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub parser: ParserConfig,
}

/// Hand window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Number of most recent hands kept in the buffer
    #[serde(default = "default_window_hands")]
    pub hands: usize,
    /// Whether statistics span the whole run or only the buffered hands
    #[serde(default)]
    pub accumulation: Accumulation,
}

pub fn default_window_hands() -> usize {
    DEFAULT_WINDOW_HANDS
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            hands: default_window_hands(),
            accumulation: Accumulation::default(),
        }
    }
}

/// Statistics configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Big blind size in chips, the unit of BB/100
    #[serde(default = "default_big_blind")]
    pub big_blind: f64,
}

pub fn default_big_blind() -> f64 {
    DEFAULT_BIG_BLIND
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            big_blind: default_big_blind(),
        }
    }
}

/// Hand history parser configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    #[serde(default)]
    pub street_tracking: StreetTracking,
}
