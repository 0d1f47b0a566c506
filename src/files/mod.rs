//! Input file discovery

mod resolve;

pub use resolve::{collect_inputs, HAND_HISTORY_EXTENSION};
