//! Feeding hand history sources through the parser into the engine.

use std::io::BufRead;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::hand_history::parser::HandParser;
use crate::hand_history::HandBlocks;
use crate::stats::WindowEngine;

/// Block counts for one ingested source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub blocks: usize,
    pub hands: usize,
    pub discarded: usize,
}

impl IngestSummary {
    pub fn merge(&mut self, other: IngestSummary) {
        self.blocks += other.blocks;
        self.hands += other.hands;
        self.discarded += other.discarded;
    }
}

/// Parse every block of `blocks` and process the resulting hands in order.
///
/// Each hand is folded into the engine before the next block is read.
pub fn ingest_blocks<R: BufRead>(
    engine: &mut WindowEngine,
    parser: &HandParser,
    blocks: HandBlocks<R>,
) -> std::io::Result<IngestSummary> {
    let mut summary = IngestSummary::default();

    for block in blocks {
        let block = block?;
        summary.blocks += 1;

        match parser.parse(&block) {
            Some(hand) => {
                engine.process(hand);
                summary.hands += 1;
            }
            None => summary.discarded += 1,
        }
    }

    Ok(summary)
}

/// Ingest one hand history file.
///
/// # Errors
///
/// Returns [`Error::Input`] if the file cannot be opened or read.
pub fn ingest_file(
    engine: &mut WindowEngine,
    parser: &HandParser,
    path: &Path,
) -> Result<IngestSummary> {
    debug!(path = ?path, "Reading hand history");
    let blocks = HandBlocks::open(path)?;
    let summary = ingest_blocks(engine, parser, blocks).map_err(|e| Error::input(path, e))?;

    info!(
        path = ?path,
        hands = summary.hands,
        discarded = summary.discarded,
        "Ingested hand history"
    );
    Ok(summary)
}
