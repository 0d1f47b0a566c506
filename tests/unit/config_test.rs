//! Unit tests for configuration loading

use std::fs;
use tempfile::TempDir;

use tdt::config::Config;
use tdt::hand_history::StreetTracking;
use tdt::stats::{Accumulation, WindowEngine};

fn write_config(contents: &str) -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, contents).unwrap();
    (temp, path)
}

#[test]
fn defaults_match_documented_values() {
    let config = Config::default();
    assert_eq!(config.window.hands, 30);
    assert_eq!(config.window.accumulation, Accumulation::Lifetime);
    assert_eq!(config.stats.big_blind, 1.0);
    assert_eq!(config.parser.street_tracking, StreetTracking::Line);
}

#[test]
fn full_file_sets_every_section() {
    let (_temp, path) = write_config(
        r#"
[window]
hands = 50
accumulation = "sliding"

[stats]
big_blind = 0.02

[parser]
street_tracking = "hand"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.window.hands, 50);
    assert_eq!(config.window.accumulation, Accumulation::Sliding);
    assert_eq!(config.stats.big_blind, 0.02);
    assert_eq!(config.parser.street_tracking, StreetTracking::Hand);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let (_temp, path) = write_config("[stats]\nbig_blind = 2.0\n");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.stats.big_blind, 2.0);
    assert_eq!(config.window.hands, 30);
    assert_eq!(config.parser.street_tracking, StreetTracking::Line);
}

#[test]
fn zero_window_is_rejected() {
    let (_temp, path) = write_config("[window]\nhands = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("window.hands must be at least 1"));
}

#[test]
fn unknown_accumulation_is_a_parse_error() {
    let (_temp, path) = write_config("[window]\naccumulation = \"forever\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
}

#[test]
fn engine_follows_config() {
    let mut config = Config::default();
    config.window.hands = 5;
    config.window.accumulation = Accumulation::Sliding;

    let engine = WindowEngine::from_config(&config);
    assert_eq!(engine.window_hands(), 5);
    assert_eq!(engine.accumulation(), Accumulation::Sliding);
}
