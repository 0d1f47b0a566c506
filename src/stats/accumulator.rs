//! Per-player counters.
//!
//! Counting rules, kept exactly as they are because historical exports were
//! produced with them:
//!
//! - VPIP and PFR count qualifying preflop *actions*, not hands. A player who
//!   calls and later re-raises preflop adds two to VPIP in that hand.
//! - The 3-bet counter mirrors PFR; there is no real 3-bet detection.
//! - Post-flop calls and raises feed the aggression counts, bets count on
//!   every street.
//! - Winning the hand counts as both reaching and winning showdown. Losing
//!   at showdown is invisible.

use serde::{Deserialize, Serialize};

use super::metrics::PlayerMetrics;
use crate::hand_history::Hand;

/// Big blind used for BB/100 unless configured otherwise.
pub const DEFAULT_BIG_BLIND: f64 = 1.0;

/// Action counts feeding AF and AFq.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggressionCounts {
    pub bet: u32,
    pub raise: u32,
    pub call: u32,
}

/// Raw counters for one player over the run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub hands: u32,
    pub vpip: u32,
    pub pfr: u32,
    pub three_bet: u32,
    pub aggression: AggressionCounts,
    pub showdown: u32,
    pub won_showdown: u32,
    pub bb_won: f64,
}

/// Incrementally folds hands into one player's [`PlayerRecord`].
#[derive(Debug, Clone)]
pub struct PlayerStatsAccumulator {
    name: String,
    big_blind: f64,
    record: PlayerRecord,
}

impl PlayerStatsAccumulator {
    pub fn new(name: impl Into<String>, big_blind: f64) -> Self {
        Self {
            name: name.into(),
            big_blind,
            record: PlayerRecord::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn record(&self) -> &PlayerRecord {
        &self.record
    }

    /// Fold one hand into the counters. Hands the player did not sit in are
    /// ignored.
    pub fn update(&mut self, hand: &Hand) {
        if !hand.has_player(&self.name) {
            return;
        }

        let record = &mut self.record;
        record.hands += 1;

        for action in hand.actions_by(&self.name) {
            let preflop = action.street.is_preflop();

            if preflop && action.is_voluntary() {
                record.vpip += 1;
            }
            if preflop && action.is_raise() {
                record.pfr += 1;
                record.three_bet += 1;
            }

            if action.is_call() && !preflop {
                record.aggression.call += 1;
            }
            if action.is_bet() {
                record.aggression.bet += 1;
            }
            if action.is_raise() && !preflop {
                record.aggression.raise += 1;
            }
        }

        if hand.is_winner(&self.name) {
            record.showdown += 1;
            record.won_showdown += 1;
            record.bb_won += hand.pot_size / self.big_blind;
        }
    }

    /// Clear all counters, keeping name and big blind.
    pub fn reset(&mut self) {
        self.record = PlayerRecord::default();
    }

    /// Current derived metrics. Calling this never changes the counters.
    pub fn snapshot(&self) -> PlayerMetrics {
        PlayerMetrics::from_record(&self.record)
    }
}
