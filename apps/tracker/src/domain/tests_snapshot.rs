use crate::domain::ledger::{HistoryLedger, RoundRecord};
use crate::domain::snapshot::Snapshot;
use crate::domain::state::{GameConfig, GameState, Phase, ScoreState};

fn record(player_index: u8, bid: u8, won: u8, points: i32) -> RoundRecord {
    RoundRecord {
        round_number: 1,
        player_index,
        bid,
        won,
        round_points: points,
        total_points_after: points,
        bags_after: Some(0),
        bag_penalties: 0,
    }
}

fn state_after_round_one(phase: Phase) -> GameState {
    GameState {
        phase,
        config: Some(GameConfig::new(4, 1, true).unwrap()),
        players: vec!["Ann".into(), "Bo".into(), "Cy".into(), "Di".into()],
        scores: ScoreState::from_parts(&[11, 0, 0, 0], &[0, 0, 0, 0]).unwrap(),
        round_no: 2,
        show_scoreboard: true,
        history: HistoryLedger::from_records(vec![
            record(0, 1, 1, 11),
            record(1, 0, 0, 0),
            record(2, 0, 0, 0),
            record(3, 0, 0, 0),
        ]),
    }
}

#[test]
fn round_trips_through_json() {
    let state = state_after_round_one(Phase::RoundSummary);
    let snap = Snapshot::capture(&state).with_saved_at("2026-10-17T00:00:00Z");
    let json = serde_json::to_string(&snap).unwrap();
    let back: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
    assert_eq!(back.restore().unwrap(), state);
}

#[test]
fn snapshot_uses_flat_keys() {
    let snap = Snapshot::capture(&state_after_round_one(Phase::Playing));
    let value = serde_json::to_value(&snap).unwrap();
    for key in [
        "config",
        "players",
        "scores",
        "bags",
        "round",
        "phase",
        "show_scoreboard",
        "history",
    ] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(value["phase"], "playing");
    assert_eq!(value["round"], 2);
}

#[test]
fn fresh_and_name_entry_states_round_trip() {
    let fresh = GameState::fresh();
    assert_eq!(Snapshot::capture(&fresh).restore().unwrap(), fresh);

    let naming = GameState {
        phase: Phase::NameEntry,
        config: Some(GameConfig::new(3, 1, false).unwrap()),
        ..GameState::fresh()
    };
    assert_eq!(Snapshot::capture(&naming).restore().unwrap(), naming);
}

#[test]
fn mismatched_lengths_are_refused() {
    let mut snap = Snapshot::capture(&state_after_round_one(Phase::Playing));
    snap.scores.pop();
    let err = snap.restore().unwrap_err();
    assert!(err.to_string().contains("inconsistent snapshot"), "{err}");
}

#[test]
fn history_must_match_round_counter() {
    let mut snap = Snapshot::capture(&state_after_round_one(Phase::Playing));
    snap.round = 3;
    assert!(snap.restore().is_err());

    let mut snap = Snapshot::capture(&state_after_round_one(Phase::Playing));
    snap.history[0].player_index = 7;
    assert!(snap.restore().is_err());
}

#[test]
fn phase_and_round_must_agree() {
    let mut snap = Snapshot::capture(&state_after_round_one(Phase::Finished));
    assert!(snap.clone().restore().is_err(), "round 2 of 13 cannot be finished");
    snap.phase = Phase::Setup;
    assert!(snap.restore().is_err(), "setup cannot carry a config");

    let mut snap = Snapshot::capture(&GameState::fresh());
    snap.phase = Phase::Playing;
    assert!(snap.restore().is_err(), "playing requires a config");
}

#[test]
fn bags_at_threshold_are_refused() {
    let mut snap = Snapshot::capture(&state_after_round_one(Phase::Playing));
    snap.bags[2] = 10;
    assert!(snap.restore().is_err());
}

#[test]
fn missing_optional_keys_default() {
    let json = r#"{"round":1,"phase":"setup"}"#;
    let snap: Snapshot = serde_json::from_str(json).unwrap();
    assert_eq!(snap.restore().unwrap(), GameState::fresh());
}

#[test]
fn scores_must_match_history_totals() {
    let mut snap = Snapshot::capture(&state_after_round_one(Phase::Playing));
    snap.scores = vec![999_999, -5, 0, 0];
    let err = snap.restore().unwrap_err();
    assert!(err.to_string().contains("disagree with history"), "{err}");
}

#[test]
fn each_round_needs_one_record_per_seat() {
    // Two records for seat 0, none for seat 1; the count still matches.
    let mut snap = Snapshot::capture(&state_after_round_one(Phase::Playing));
    snap.history[1].player_index = 0;
    let err = snap.restore().unwrap_err();
    assert!(err.to_string().contains("more than one record"), "{err}");
}

#[test]
fn running_totals_must_chain() {
    let mut snap = Snapshot::capture(&state_after_round_one(Phase::Playing));
    snap.history[0].total_points_after = 50;
    snap.scores[0] = 50;
    assert!(snap.restore().is_err());
}

#[test]
fn bags_must_stay_zero_when_disabled() {
    let mut state = state_after_round_one(Phase::Playing);
    state.config = Some(GameConfig::new(4, 1, false).unwrap());
    assert!(Snapshot::capture(&state).restore().is_ok());

    let mut snap = Snapshot::capture(&state);
    snap.bags[0] = 5;
    let err = snap.restore().unwrap_err();
    assert!(err.to_string().contains("bags are disabled"), "{err}");
}
