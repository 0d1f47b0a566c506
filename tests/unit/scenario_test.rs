//! Reference hand scenarios run end to end through segmenter, parser and engine

use crate::helpers::engine_for;
use tdt::stats::AggressionFactor;

const SINGLE_RAISE: &str = "PokerStars Hand #123: Hold'em No Limit
Seat 1: Alice (100.00 in chips)
Alice: raises to 3
Alice collected 4.50 from pot
Total pot 4.50
";

#[test]
fn single_raise_and_win() {
    let engine = engine_for(SINGLE_RAISE);

    assert_eq!(engine.history().len(), 1);
    let record = engine.latest().unwrap();
    assert_eq!(record.hand_id, "123");

    let alice = &record.players["Alice"];
    assert_eq!(alice.hands, 1);
    assert_eq!(alice.vpip, 100.0);
    assert_eq!(alice.pfr, 100.0);
    assert_eq!(alice.wsd, 100.0);
    assert_eq!(alice.bb_per_100, 450.0);
    assert_eq!(alice.af, AggressionFactor::Undefined);
}

#[test]
fn block_without_seats_adds_no_snapshot() {
    let log = format!(
        "{}PokerStars Hand #124: Hold'em No Limit\nAlice: raises to 3\nTotal pot 3\n",
        SINGLE_RAISE
    );
    let engine = engine_for(&log);

    assert_eq!(engine.history().len(), 1);
    assert_eq!(engine.latest().unwrap().hand_id, "123");
    assert_eq!(engine.player("Alice").unwrap().record().hands, 1);
}

#[test]
fn winner_only_in_first_hand() {
    let log = "PokerStars Hand #1: Hold'em
Seat 1: Alice (100 in chips)
Seat 2: Bob (100 in chips)
Alice: raises 2 to 3
Bob: folds
Alice collected 2 from pot
Total pot 2
PokerStars Hand #2: Hold'em
Seat 1: Alice (101 in chips)
Seat 2: Bob (99 in chips)
Alice: folds
";
    let engine = engine_for(log);

    let alice = engine.player("Alice").unwrap().record();
    assert_eq!(alice.hands, 2);
    assert_eq!(alice.won_showdown, 1);
    assert_eq!(alice.vpip, 1);

    let metrics = &engine.latest().unwrap().players["Alice"];
    assert_eq!(metrics.vpip, 50.0);
    assert_eq!(metrics.wsd, 50.0);
    assert_eq!(metrics.bb_per_100, 100.0);
}
