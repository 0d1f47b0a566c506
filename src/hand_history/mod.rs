//! PokerStars hand history model, segmenter and parser
//!
//! Hand histories are loosely structured text: every hand starts with a
//! `PokerStars Hand #<id>:` header line and runs until the next header.
//!
//! # Structure
//!
//! - `segment` - Splitting decoded text into per-hand line blocks
//! - `parser` - Turning one block into a typed [`Hand`]

pub mod parser;
pub mod segment;

pub use parser::{parse_hand, HandParser, StreetTracking};
pub use segment::{HandBlocks, HAND_HEADER};

use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// Street
// ============================================================================

/// Betting round an action was recorded on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Street {
    /// Detect a street header literal (`*** FLOP ***` etc.) anywhere in `line`.
    pub fn from_header(line: &str) -> Option<Self> {
        if line.contains("*** FLOP") {
            Some(Street::Flop)
        } else if line.contains("*** TURN") {
            Some(Street::Turn)
        } else if line.contains("*** RIVER") {
            Some(Street::River)
        } else if line.contains("*** SHOW DOWN") {
            Some(Street::Showdown)
        } else {
            None
        }
    }

    pub fn is_preflop(&self) -> bool {
        *self == Street::Preflop
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Street::Preflop => "PREFLOP",
            Street::Flop => "FLOP",
            Street::Turn => "TURN",
            Street::River => "RIVER",
            Street::Showdown => "SHOWDOWN",
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Action
// ============================================================================

/// One action line attributed to a player.
///
/// `text` is kept verbatim (everything after the first colon, trimmed);
/// classification is by substring, so `"raises 2 to 3"` is a raise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub street: Street,
    pub player: String,
    pub text: String,
}

impl Action {
    pub fn new(street: Street, player: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            street,
            player: player.into(),
            text: text.into(),
        }
    }

    pub fn is_call(&self) -> bool {
        self.text.contains("calls")
    }

    pub fn is_bet(&self) -> bool {
        self.text.contains("bets")
    }

    pub fn is_raise(&self) -> bool {
        self.text.contains("raises")
    }

    /// Call, bet or raise: chips went in by choice.
    pub fn is_voluntary(&self) -> bool {
        self.is_call() || self.is_raise() || self.is_bet()
    }
}

// ============================================================================
// Hand
// ============================================================================

/// A fully resolved hand.
///
/// Only [`parse_hand`] builds these from text, and it refuses to do so
/// without an id and at least one seated player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    pub id: String,
    pub timestamp: Option<DateTime<Utc>>,
    /// Player name -> starting stack, in seat line order.
    pub players: IndexMap<String, f64>,
    /// Actions in log order.
    pub actions: Vec<Action>,
    pub winner: Option<String>,
    pub pot_size: f64,
}

impl Hand {
    pub fn has_player(&self, name: &str) -> bool {
        self.players.contains_key(name)
    }

    pub fn is_winner(&self, name: &str) -> bool {
        self.winner.as_deref() == Some(name)
    }

    /// Actions belonging to `name`, in log order.
    pub fn actions_by<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Action> + 'a {
        self.actions.iter().filter(move |a| a.player == name)
    }
}
