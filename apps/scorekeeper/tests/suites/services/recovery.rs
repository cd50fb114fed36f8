//! Bad or stale snapshots never surface as errors: the service falls back
//! to the empty match or recomputes what it can.

use scorekeeper::{
    InMemoryMatchStore, MatchService, MatchState, MatchStatus, MatchStore, PlayerTichuCall,
    RoundResult, Team, TichuCall,
};

use crate::support::fixtures::{big_team_a_round, even_round, players, snapshot_json, KEY};

fn in_progress(rounds: Vec<RoundResult>) -> MatchState {
    MatchState {
        players: players().to_vec(),
        rounds,
        status: MatchStatus::InProgress,
        ..MatchState::default()
    }
}

#[test]
fn corrupt_json_falls_back_to_empty() {
    let store = InMemoryMatchStore::with_entry(KEY, "{not json");
    let service = MatchService::open(&store, KEY);
    assert_eq!(*service.state(), MatchState::default());
    // Left in place until the next write.
    assert_eq!(store.get(KEY).as_deref(), Some("{not json"));
}

#[test]
fn wrong_shape_falls_back_to_empty() {
    let store = InMemoryMatchStore::with_entry(KEY, r#"{"players": 7}"#);
    let service = MatchService::open(&store, KEY);
    assert_eq!(service.state().status, MatchStatus::NotStarted);
}

#[test]
fn impossible_snapshot_falls_back_to_empty() {
    let mut state = in_progress(vec![even_round()]);
    state.players.truncate(3);
    let store = InMemoryMatchStore::with_entry(KEY, snapshot_json(&state));

    let service = MatchService::open(&store, KEY);
    assert_eq!(*service.state(), MatchState::default());
}

#[test]
fn stale_totals_are_recomputed() {
    let mut state = in_progress(vec![big_team_a_round(), even_round()]);
    state.team_a_score = 5;
    state.team_b_score = -999;
    state.dealer_index = 0;
    let store = InMemoryMatchStore::with_entry(KEY, snapshot_json(&state));

    let service = MatchService::open(&store, KEY);
    let loaded = service.state();
    assert_eq!((loaded.team_a_score, loaded.team_b_score), (450, 50));
    assert_eq!(loaded.dealer_index, 2);
    assert_eq!(loaded.rounds, state.rounds);
}

#[test]
fn finished_without_a_winner_reopens() {
    let mut state = in_progress(vec![even_round()]);
    state.status = MatchStatus::Finished;
    state.winner = Some(Team::TeamB);
    let store = InMemoryMatchStore::with_entry(KEY, snapshot_json(&state));

    let service = MatchService::open(&store, KEY);
    assert_eq!(service.state().status, MatchStatus::InProgress);
    assert_eq!(service.state().winner, None);
}

#[test]
fn finished_match_is_kept_finished() {
    let mut state = in_progress(vec![big_team_a_round(); 3]);
    state.status = MatchStatus::Finished;
    let store = InMemoryMatchStore::with_entry(KEY, snapshot_json(&state));

    let service = MatchService::open(&store, KEY);
    assert_eq!(service.state().status, MatchStatus::Finished);
    assert_eq!(service.state().winner, Some(Team::TeamA));
}

#[test]
fn missing_fields_take_defaults() {
    let store = InMemoryMatchStore::with_entry(KEY, "{}");
    let service = MatchService::open(&store, KEY);
    assert_eq!(*service.state(), MatchState::default());
}

#[test]
fn next_write_replaces_a_corrupt_snapshot() {
    let store = InMemoryMatchStore::with_entry(KEY, "garbage");
    let mut service = MatchService::open(&store, KEY);
    service.start(players()).unwrap();

    let payload = store.load(KEY).unwrap().unwrap();
    let stored: MatchState = serde_json::from_str(&payload).unwrap();
    assert_eq!(stored.status, MatchStatus::InProgress);
}

#[test]
fn bad_seat_index_keeps_the_round_log() {
    let round = even_round().with_call(PlayerTichuCall::won(1, TichuCall::Tichu));
    let state = in_progress(vec![big_team_a_round(), round]);
    let mut json: serde_json::Value = serde_json::from_str(&snapshot_json(&state)).unwrap();
    json["rounds"][1]["tichuCalls"][0]["playerIndex"] = serde_json::json!(300);
    let store = InMemoryMatchStore::with_entry(KEY, json.to_string());

    let service = MatchService::open(&store, KEY);
    let loaded = service.state();
    assert_eq!(loaded.status, MatchStatus::InProgress);
    assert_eq!(loaded.rounds.len(), 2);
    // The unusable call scores nothing; the rest of the log still counts.
    assert_eq!((loaded.team_a_score, loaded.team_b_score), (450, 50));
}
