//! Streaming player statistics
//!
//! - `accumulator` - Raw per-player counters updated hand by hand
//! - `metrics` - Derived percentages and ratios
//! - `engine` - Window buffer, accumulator map and snapshot history

pub mod accumulator;
pub mod engine;
pub mod metrics;

pub use accumulator::{AggressionCounts, PlayerRecord, PlayerStatsAccumulator, DEFAULT_BIG_BLIND};
pub use engine::{Accumulation, SnapshotRecord, WindowEngine, DEFAULT_WINDOW_HANDS};
pub use metrics::{AggressionFactor, PlayerMetrics, Snapshot, AF_PLACEHOLDER};
