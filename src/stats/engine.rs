//! Streaming window engine.
//!
//! The engine is the whole run's state: a bounded buffer of the last N hands,
//! one accumulator per player ever seen, and the append-only snapshot
//! history. Callers own it and feed it hands one at a time.
//!
//! Memory: the buffer is O(N), but the accumulator map and the history grow
//! with hands processed times distinct players for the whole run. Nothing is
//! pruned.
//!
//! # Accumulation
//!
//! With [`Accumulation::Lifetime`] (the default) statistics cover every hand
//! since the engine was created and the buffer only retains hands. With
//! [`Accumulation::Sliding`] every accumulator is rebuilt from the buffered
//! hands after each push, so statistics cover the last N hands only. The two
//! modes give different numbers on any run longer than N hands.

use std::collections::VecDeque;

use indexmap::IndexMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::accumulator::{PlayerStatsAccumulator, DEFAULT_BIG_BLIND};
use super::metrics::Snapshot;
use crate::config::Config;
use crate::hand_history::Hand;

/// Default capacity of the hand buffer.
pub const DEFAULT_WINDOW_HANDS: usize = 30;

/// What the statistics are accumulated over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Accumulation {
    /// Every hand of the run; the window only bounds retention.
    #[default]
    Lifetime,
    /// Only the hands currently in the window.
    Sliding,
}

/// Snapshot taken right after a hand was processed.
///
/// Serialized as a `[hand_id, {player: metrics}]` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, Snapshot)", into = "(String, Snapshot)")]
pub struct SnapshotRecord {
    pub hand_id: String,
    pub players: Snapshot,
}

impl SnapshotRecord {
    pub fn new(hand_id: impl Into<String>, players: Snapshot) -> Self {
        Self {
            hand_id: hand_id.into(),
            players,
        }
    }
}

impl From<(String, Snapshot)> for SnapshotRecord {
    fn from((hand_id, players): (String, Snapshot)) -> Self {
        Self { hand_id, players }
    }
}

impl From<SnapshotRecord> for (String, Snapshot) {
    fn from(record: SnapshotRecord) -> Self {
        (record.hand_id, record.players)
    }
}

/// Engine context for one run.
#[derive(Debug, Clone)]
pub struct WindowEngine {
    window_hands: usize,
    big_blind: f64,
    accumulation: Accumulation,
    window: VecDeque<Hand>,
    players: IndexMap<String, PlayerStatsAccumulator>,
    history: Vec<SnapshotRecord>,
}

impl Default for WindowEngine {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_HANDS)
    }
}

impl WindowEngine {
    /// Lifetime accumulation with a big blind of 1.0.
    pub fn new(window_hands: usize) -> Self {
        Self {
            window_hands,
            big_blind: DEFAULT_BIG_BLIND,
            accumulation: Accumulation::default(),
            window: VecDeque::with_capacity(window_hands),
            players: IndexMap::new(),
            history: Vec::new(),
        }
    }

    /// Engine configured from the `[window]` and `[stats]` sections.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.window.hands)
            .with_big_blind(config.stats.big_blind)
            .with_accumulation(config.window.accumulation)
    }

    /// Applies to accumulators created afterwards.
    pub fn with_big_blind(mut self, big_blind: f64) -> Self {
        self.big_blind = big_blind;
        self
    }

    pub fn with_accumulation(mut self, accumulation: Accumulation) -> Self {
        self.accumulation = accumulation;
        self
    }

    /// Ingest one hand and append a snapshot of all known players.
    pub fn process(&mut self, hand: Hand) -> &SnapshotRecord {
        let hand_id = hand.id.clone();
        let big_blind = self.big_blind;

        for name in hand.players.keys() {
            let acc = self
                .players
                .entry(name.clone())
                .or_insert_with(|| PlayerStatsAccumulator::new(name.clone(), big_blind));
            if self.accumulation == Accumulation::Lifetime {
                acc.update(&hand);
            }
        }

        self.push_window(hand);

        if self.accumulation == Accumulation::Sliding {
            self.replay_window();
        }

        let snapshot = self.snapshot();
        debug!(
            hand_id = %hand_id,
            players = snapshot.len(),
            window = self.window.len(),
            "Processed hand"
        );

        self.history.push(SnapshotRecord::new(hand_id, snapshot));
        &self.history[self.history.len() - 1]
    }

    /// Metrics of every player seen so far, not only those of the last hand.
    pub fn snapshot(&self) -> Snapshot {
        self.players
            .iter()
            .map(|(name, acc)| (name.clone(), acc.snapshot()))
            .collect()
    }

    fn push_window(&mut self, hand: Hand) {
        if self.window_hands == 0 {
            return;
        }
        while self.window.len() >= self.window_hands {
            if let Some(evicted) = self.window.pop_front() {
                trace!(hand_id = %evicted.id, "Evicted hand from window");
            }
        }
        self.window.push_back(hand);
    }

    fn replay_window(&mut self) {
        for acc in self.players.values_mut() {
            acc.reset();
            for hand in &self.window {
                acc.update(hand);
            }
        }
    }

    pub fn window_hands(&self) -> usize {
        self.window_hands
    }

    pub fn accumulation(&self) -> Accumulation {
        self.accumulation
    }

    /// Hands currently retained, oldest first.
    pub fn window(&self) -> &VecDeque<Hand> {
        &self.window
    }

    pub fn player(&self, name: &str) -> Option<&PlayerStatsAccumulator> {
        self.players.get(name)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// All snapshots in processing order.
    pub fn history(&self) -> &[SnapshotRecord] {
        &self.history
    }

    pub fn latest(&self) -> Option<&SnapshotRecord> {
        self.history.last()
    }

}
