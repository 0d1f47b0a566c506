//! CLI definitions for tdt
//!
//! Kept out of main.rs so the argument-to-config mapping can be tested
//! without spawning the binary.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;

use crate::config::Config;
use crate::hand_history::StreetTracking;
use crate::stats::Accumulation;

/// Version string: package version plus git sha on dev builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build clap styles: green headers and literals, red errors.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser, Debug)]
#[command(name = "tdt")]
#[command(about = "Table Dynamics Tracker - rolling poker stats from PokerStars hand histories")]
#[command(
    long_about = "Table Dynamics Tracker (TDT) - per-player statistics from hand history logs.

Reads PokerStars hand history files, folds every hand into per-player
counters and prints VPIP, PFR, AF, AFq, W$SD and BB/100 after the last hand.
The full per-hand snapshot history can be exported as CSV or JSON.

EXAMPLES:
    tdt --hh ~/HandHistory/                   All .txt files below a directory
    tdt --hh session.txt --player Alice       Show only Alice's row
    tdt --hh session.txt --export-json out.json
    tdt --hh logs/ --window-hands 100 --accumulation sliding

CONFIG:
    ~/.config/tdt/config.toml (or --config FILE) sets defaults for
    [window] hands/accumulation, [stats] big_blind and
    [parser] street_tracking. Command-line flags override it."
)]
#[command(version = VERSION, styles = build_cli_styles())]
pub struct Cli {
    /// Hand history file or directory
    #[arg(long = "hh", value_name = "PATH")]
    pub hh: PathBuf,

    /// Window size in hands (default 30)
    #[arg(long, value_name = "N")]
    pub window_hands: Option<usize>,

    /// Only show this player in the table (all players are still tracked)
    #[arg(long, value_name = "NAME")]
    pub player: Option<String>,

    /// Big blind size used for BB/100 (default 1.0)
    #[arg(long, value_name = "CHIPS")]
    pub big_blind: Option<f64>,

    /// Accumulate over the whole run or only the window
    #[arg(long, value_enum)]
    pub accumulation: Option<Accumulation>,

    /// Assign streets per line (legacy) or track them through the hand
    #[arg(long, value_enum)]
    pub street_tracking: Option<StreetTracking>,

    /// Export every snapshot to CSV
    #[arg(long, value_name = "FILE")]
    pub export_csv: Option<PathBuf>,

    /// Export every snapshot to JSON
    #[arg(long, value_name = "FILE")]
    pub export_json: Option<PathBuf>,

    /// Config file (default ~/.config/tdt/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(long, short)]
    pub quiet: bool,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(hands) = self.window_hands {
            config.window.hands = hands;
        }
        if let Some(accumulation) = self.accumulation {
            config.window.accumulation = accumulation;
        }
        if let Some(big_blind) = self.big_blind {
            config.stats.big_blind = big_blind;
        }
        if let Some(street_tracking) = self.street_tracking {
            config.parser.street_tracking = street_tracking;
        }
    }
}
