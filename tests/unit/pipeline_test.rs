//! File ingestion through the public pipeline API

use crate::helpers::{feed_with, fixtures_dir, load_fixture, temp_fixture};
use tdt::hand_history::{HandParser, StreetTracking};
use tdt::ingest::{ingest_file, IngestSummary};
use tdt::stats::{Accumulation, AggressionFactor, WindowEngine};
use tdt::Error;

#[test]
fn ingest_file_reports_block_counts() {
    let (_dir, path) = temp_fixture("session.txt");
    let mut engine = WindowEngine::new(30);

    let summary = ingest_file(&mut engine, &HandParser::default(), &path).unwrap();

    assert_eq!(
        summary,
        IngestSummary {
            blocks: 3,
            hands: 2,
            discarded: 1,
        }
    );
    let ids: Vec<_> = engine.history().iter().map(|r| r.hand_id.as_str()).collect();
    assert_eq!(ids, vec!["1001", "1002"]);
}

#[test]
fn line_local_streets_count_every_action_as_preflop() {
    let mut engine = WindowEngine::new(30);
    feed_with(&mut engine, &HandParser::default(), &load_fixture("session.txt"));

    let players = &engine.latest().unwrap().players;
    let names: Vec<_> = players.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);

    let bob = &players["Bob"];
    assert_eq!(bob.hands, 2);
    assert_eq!(bob.vpip, 200.0);
    assert_eq!(bob.pfr, 0.0);
    assert_eq!(bob.af, AggressionFactor::Undefined);
    assert_eq!(bob.afq, 100.0);
    assert_eq!(bob.bb_per_100, 1400.0);

    let carol = &players["Carol"];
    assert_eq!(carol.hands, 1);
    assert_eq!(carol.vpip, 200.0);
    assert_eq!(carol.afq, 0.0);
}

#[test]
fn hand_tracked_streets_separate_postflop_actions() {
    let parser = HandParser::new(StreetTracking::Hand);
    let mut engine = WindowEngine::new(30);
    feed_with(&mut engine, &parser, &load_fixture("session.txt"));

    let players = &engine.latest().unwrap().players;

    let alice = &players["Alice"];
    assert_eq!(alice.vpip, 50.0);
    assert_eq!(alice.pfr, 50.0);
    assert_eq!(alice.afq, 100.0);

    let bob = &players["Bob"];
    assert_eq!(bob.vpip, 100.0);

    let carol = &players["Carol"];
    assert_eq!(carol.vpip, 100.0);
    assert_eq!(carol.pfr, 100.0);
    assert_eq!(carol.af, AggressionFactor::Ratio(0.0));
}

#[test]
fn players_persist_across_files() {
    let mut engine = WindowEngine::new(30);
    let parser = HandParser::default();
    for name in ["session.txt", "second_table.txt"] {
        ingest_file(&mut engine, &parser, &fixtures_dir().join(name)).unwrap();
    }

    let latest = engine.latest().unwrap();
    assert_eq!(latest.hand_id, "2001");
    assert_eq!(latest.players.len(), 4);
    assert_eq!(latest.players["Alice"].hands, 3);
    // Carol sat out the last hand but is still reported.
    assert_eq!(latest.players["Carol"].hands, 1);
}

#[test]
fn sliding_accumulation_forgets_evicted_hands() {
    let mut engine = WindowEngine::new(1).with_accumulation(Accumulation::Sliding);
    feed_with(&mut engine, &HandParser::default(), &load_fixture("session.txt"));

    let players = &engine.latest().unwrap().players;
    let alice = &players["Alice"];
    assert_eq!(alice.hands, 1);
    assert_eq!(alice.vpip, 0.0);
    assert_eq!(alice.wsd, 0.0);
    assert_eq!(alice.bb_per_100, 0.0);
    assert_eq!(engine.window().len(), 1);
}

#[test]
fn lifetime_accumulation_ignores_window_bound() {
    let mut engine = WindowEngine::new(1);
    feed_with(&mut engine, &HandParser::default(), &load_fixture("session.txt"));

    assert_eq!(engine.window().len(), 1);
    assert_eq!(engine.latest().unwrap().players["Alice"].hands, 2);
}

#[test]
fn big_blind_scales_bb_per_100() {
    let mut engine = WindowEngine::new(30).with_big_blind(2.0);
    feed_with(&mut engine, &HandParser::default(), &load_fixture("session.txt"));

    assert_eq!(engine.latest().unwrap().players["Alice"].bb_per_100, 250.0);
}

#[test]
fn missing_file_is_an_input_error() {
    let mut engine = WindowEngine::new(30);
    let path = fixtures_dir().join("does-not-exist.txt");

    let err = ingest_file(&mut engine, &HandParser::default(), &path).unwrap_err();

    assert!(matches!(err, Error::Input { .. }));
    assert!(engine.history().is_empty());
}
