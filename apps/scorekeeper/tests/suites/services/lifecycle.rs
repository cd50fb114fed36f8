use scorekeeper::{
    DomainError, InMemoryMatchStore, MatchService, MatchStatus, PlayerTichuCall, RoundDraft,
    RoundResult, ScoreDelta, Team, TichuCall,
};

use crate::support::fixtures::{big_team_a_round, even_round, players, started_service, KEY};

#[test]
fn fresh_store_opens_empty() {
    let store = InMemoryMatchStore::new();
    let service = MatchService::open(&store, KEY);
    assert_eq!(service.state().status, MatchStatus::NotStarted);
    assert!(service.state().players.is_empty());
    assert!(service.current_dealer().is_none());
    assert!(service.history().is_empty());
}

#[test]
fn full_match_to_a_winner() {
    let store = InMemoryMatchStore::new();
    let mut service = started_service(&store);
    assert_eq!(service.current_dealer().map(|p| p.name.as_str()), Some("Ann"));

    let delta = service.record_round(big_team_a_round()).unwrap();
    assert_eq!(delta, ScoreDelta::new(400, 0));
    assert_eq!(service.current_dealer().map(|p| p.name.as_str()), Some("Bo"));

    service.record_round(big_team_a_round()).unwrap();
    service.record_round(big_team_a_round()).unwrap();

    let state = service.state();
    assert_eq!(state.team_a_score, 1200);
    assert_eq!(state.status, MatchStatus::Finished);
    assert_eq!(state.winner, Some(Team::TeamA));

    let err = service.record_round(even_round()).unwrap_err();
    assert_eq!(
        err.as_domain(),
        Some(&DomainError::NotInProgress(MatchStatus::Finished))
    );
}

#[test]
fn rounds_before_start_are_rejected() {
    let store = InMemoryMatchStore::new();
    let mut service = MatchService::open(&store, KEY);
    let err = service.record_round(even_round()).unwrap_err();
    assert_eq!(
        err.as_domain(),
        Some(&DomainError::NotInProgress(MatchStatus::NotStarted))
    );
    assert!(!store.contains(KEY));
}

#[test]
fn invalid_rounds_leave_state_untouched() {
    let store = InMemoryMatchStore::new();
    let mut service = started_service(&store);
    service.record_round(even_round()).unwrap();
    let before = service.state().clone();
    let saved = store.get(KEY);

    let err = service
        .record_round(RoundResult::card_points(60, 60))
        .unwrap_err();
    assert!(matches!(err.as_domain(), Some(DomainError::InvalidRound(_))));

    let err = service
        .record_round(
            RoundResult::card_points(50, 50)
                .with_call(PlayerTichuCall::pending(1, TichuCall::Tichu)),
        )
        .unwrap_err();
    assert!(matches!(
        err.as_domain(),
        Some(DomainError::UnresolvedTichuCall { seat: 1, .. })
    ));

    assert_eq!(service.state(), &before);
    assert_eq!(store.get(KEY), saved);
}

#[test]
fn undo_reopens_a_finished_match() {
    let store = InMemoryMatchStore::new();
    let mut service = started_service(&store);
    for _ in 0..3 {
        service.record_round(big_team_a_round()).unwrap();
    }
    assert_eq!(service.state().status, MatchStatus::Finished);

    let removed = service.undo_last_round().unwrap();
    assert_eq!(removed, Some(big_team_a_round()));
    let state = service.state();
    assert_eq!(state.status, MatchStatus::InProgress);
    assert_eq!(state.winner, None);
    assert_eq!(state.team_a_score, 800);
    assert_eq!(state.dealer_index, 2);
}

#[test]
fn undo_on_empty_log_is_a_no_op() {
    let store = InMemoryMatchStore::new();
    let mut service = started_service(&store);
    let before = service.state().clone();
    assert_eq!(service.undo_last_round().unwrap(), None);
    assert_eq!(service.state(), &before);
}

#[test]
fn draft_feeds_the_service() {
    let store = InMemoryMatchStore::new();
    let mut service = started_service(&store);

    let mut draft = RoundDraft::new();
    draft.set_call(1, TichuCall::Tichu).unwrap();
    draft.set_success(1, false).unwrap();
    draft.set_team_a_points(25);
    let delta = service.record_round(draft.build().unwrap()).unwrap();

    assert_eq!(delta, ScoreDelta::new(25, -25));
    let history = service.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].calls[0].player, "Bo");
}

#[test]
fn restart_discards_previous_match() {
    let store = InMemoryMatchStore::new();
    let mut service = started_service(&store);
    service.record_round(big_team_a_round()).unwrap();

    service.start(players()).unwrap();
    let state = service.state();
    assert!(state.rounds.is_empty());
    assert_eq!(state.team_a_score, 0);
    assert_eq!(state.status, MatchStatus::InProgress);
}

#[test]
fn team_rosters_follow_seating() {
    let store = InMemoryMatchStore::new();
    let service = started_service(&store);
    let names = |team| -> Vec<String> {
        service
            .team_roster(team)
            .into_iter()
            .map(|p| p.name.clone())
            .collect()
    };
    assert_eq!(names(Team::TeamA), ["Ann", "Cleo"]);
    assert_eq!(names(Team::TeamB), ["Bo", "Dev"]);
}
