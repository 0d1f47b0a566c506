//! Table Dynamics Tracker (TDT) Library
//!
//! Streams PokerStars hand histories into per-player statistics, taking a
//! snapshot of every known player after each hand.
//!
//! ```
//! use tdt::hand_history::{parse_hand, HandBlocks};
//! use tdt::stats::WindowEngine;
//!
//! let log = "PokerStars Hand #123: Hold'em\n\
//!            Seat 1: Alice (100.00 in chips)\n\
//!            Alice: raises 2 to 3\n\
//!            Alice collected 4.50 from pot\n\
//!            Total pot 4.50\n";
//!
//! let mut engine = WindowEngine::new(30);
//! for block in HandBlocks::from_text(log) {
//!     if let Some(hand) = parse_hand(&block?) {
//!         engine.process(hand);
//!     }
//! }
//!
//! let alice = &engine.latest().unwrap().players["Alice"];
//! assert_eq!(alice.vpip, 100.0);
//! assert_eq!(alice.bb_per_100, 450.0);
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod files;
pub mod hand_history;
pub mod ingest;
pub mod logging;
pub mod stats;

pub use config::Config;
pub use error::{Error, Result};
pub use hand_history::{Action, Hand, HandBlocks, Street};
pub use stats::{PlayerMetrics, SnapshotRecord, WindowEngine};
