//! Hand block segmentation.
//!
//! Splits a hand history stream into blocks of trimmed lines. A block starts
//! at every line beginning with [`HAND_HEADER`]; that line is the first line
//! of the new block. Whatever is still buffered when the input runs out is
//! flushed as the final block.
//!
//! Decoding is lenient: bytes that are not valid UTF-8 are dropped and a byte
//! order mark at the start of any line is stripped, so concatenated files
//! still split on their headers. Neither is ever reported as an error. Only
//! genuine read failures surface.
//!
//! # Example
//!
//! ```
//! use tdt::hand_history::HandBlocks;
//!
//! let log = "PokerStars Hand #1: ...\nSeat 1: Alice (100 in chips)\n\
//!            PokerStars Hand #2: ...\n";
//! let blocks: Vec<_> = HandBlocks::from_text(log).collect::<Result<_, _>>()?;
//! assert_eq!(blocks.len(), 2);
//! assert_eq!(blocks[1], vec!["PokerStars Hand #2: ..."]);
//! # Ok::<(), std::io::Error>(())
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::Path;

use crate::error::{Error, Result};

/// Literal prefix of the first line of every hand.
pub const HAND_HEADER: &str = "PokerStars Hand";

const BOM: char = '\u{feff}';

/// Lazy iterator over the hand blocks of one stream.
///
/// Holds at most one block in memory. Re-opening the same source yields the
/// same sequence again.
pub struct HandBlocks<R> {
    reader: R,
    pending: Vec<String>,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> HandBlocks<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
            buf: Vec::new(),
            done: false,
        }
    }
}

impl HandBlocks<BufReader<File>> {
    /// Open a hand history file for segmentation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Input`] if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::input(path, e))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<'a> HandBlocks<&'a [u8]> {
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }

    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<R: BufRead> Iterator for HandBlocks<R> {
    type Item = io::Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    self.done = true;
                    if self.pending.is_empty() {
                        return None;
                    }
                    return Some(Ok(std::mem::take(&mut self.pending)));
                }
                Ok(_) => {
                    let decoded = decode_lossy(&self.buf);
                    let line = decoded.trim_start_matches(BOM);
                    let trimmed = line.trim().to_string();

                    if line.starts_with(HAND_HEADER) && !self.pending.is_empty() {
                        let block = std::mem::replace(&mut self.pending, vec![trimmed]);
                        return Some(Ok(block));
                    }
                    self.pending.push(trimmed);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

impl<R: BufRead> FusedIterator for HandBlocks<R> {}

/// Decode UTF-8, silently dropping invalid sequences.
fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}
