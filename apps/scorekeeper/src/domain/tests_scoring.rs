use crate::domain::round::{PlayerTichuCall, RoundResult, TichuCall};
use crate::domain::scoring::{call_adjustment, score_round, score_rounds, ScoreDelta};
use crate::domain::state::{Player, Team};
use crate::domain::test_state_helpers::standard_players;

#[test]
fn card_points_pass_through() {
    let players = standard_players();
    assert_eq!(
        score_round(&RoundResult::card_points(65, 35), &players),
        ScoreDelta::new(65, 35)
    );
}

#[test]
fn double_victory_overrides_card_points() {
    // Card points entered for the losing side are ignored entirely.
    let round = RoundResult {
        team_a_card_points: 60,
        team_b_card_points: 40,
        ..RoundResult::double_victory_for(Team::TeamB)
    };
    assert_eq!(
        score_round(&round, &standard_players()),
        ScoreDelta::new(0, 200)
    );
    assert_eq!(
        score_round(
            &RoundResult::double_victory_for(Team::TeamA),
            &standard_players()
        ),
        ScoreDelta::new(200, 0)
    );
}

#[test]
fn grand_tichu_success_and_failure() {
    let players = standard_players();
    let won = RoundResult::card_points(30, 70)
        .with_call(PlayerTichuCall::won(0, TichuCall::GrandTichu));
    assert_eq!(score_round(&won, &players), ScoreDelta::new(230, 70));

    let lost = RoundResult::card_points(30, 70)
        .with_call(PlayerTichuCall::lost(0, TichuCall::GrandTichu));
    assert_eq!(score_round(&lost, &players), ScoreDelta::new(-170, 70));
}

#[test]
fn calls_apply_on_top_of_double_victory() {
    let round = RoundResult::double_victory_for(Team::TeamA)
        .with_call(PlayerTichuCall::won(2, TichuCall::Tichu))
        .with_call(PlayerTichuCall::lost(3, TichuCall::GrandTichu));
    assert_eq!(
        score_round(&round, &standard_players()),
        ScoreDelta::new(300, -200)
    );
}

#[test]
fn deltas_are_not_clamped() {
    // Both TeamA players fail a Grand Tichu with few card points.
    let round = RoundResult::card_points(-25, 125)
        .with_call(PlayerTichuCall::lost(0, TichuCall::GrandTichu))
        .with_call(PlayerTichuCall::lost(2, TichuCall::GrandTichu));
    assert_eq!(
        score_round(&round, &standard_players()),
        ScoreDelta::new(-425, 125)
    );
}

#[test]
fn call_order_does_not_matter() {
    let players = standard_players();
    let forward = RoundResult::card_points(40, 60)
        .with_call(PlayerTichuCall::won(1, TichuCall::Tichu))
        .with_call(PlayerTichuCall::lost(2, TichuCall::GrandTichu));
    let mut reversed = forward.clone();
    reversed.tichu_calls.reverse();
    assert_eq!(
        score_round(&forward, &players),
        score_round(&reversed, &players)
    );
}

#[test]
fn lenient_for_missing_players_and_unresolved_calls() {
    let round = RoundResult::card_points(50, 50)
        .with_call(PlayerTichuCall::won(7, TichuCall::GrandTichu))
        .with_call(PlayerTichuCall::pending(1, TichuCall::Tichu));
    assert_eq!(
        score_round(&round, &standard_players()),
        ScoreDelta::new(50, 50)
    );

    let no_players: [Player; 0] = [];
    let called = RoundResult::card_points(50, 50)
        .with_call(PlayerTichuCall::won(0, TichuCall::Tichu));
    assert_eq!(score_round(&called, &no_players), ScoreDelta::new(50, 50));
}

#[test]
fn call_adjustment_signs() {
    assert_eq!(call_adjustment(&PlayerTichuCall::won(0, TichuCall::Tichu)), 100);
    assert_eq!(
        call_adjustment(&PlayerTichuCall::lost(0, TichuCall::GrandTichu)),
        -200
    );
    assert_eq!(
        call_adjustment(&PlayerTichuCall::pending(0, TichuCall::Tichu)),
        0
    );
    assert_eq!(call_adjustment(&PlayerTichuCall::won(0, TichuCall::None)), 0);
}

#[test]
fn score_rounds_folds_in_order() {
    let players = standard_players();
    let rounds = vec![
        RoundResult::card_points(25, 75),
        RoundResult::double_victory_for(Team::TeamA),
        RoundResult::card_points(50, 50).with_call(PlayerTichuCall::lost(3, TichuCall::Tichu)),
    ];
    assert_eq!(score_rounds(&rounds, &players), ScoreDelta::new(275, 25));
    let empty: Vec<RoundResult> = Vec::new();
    assert_eq!(score_rounds(&empty, &players), ScoreDelta::ZERO);
}

#[test]
fn delta_accessors() {
    let mut delta = ScoreDelta::new(10, -20);
    delta += ScoreDelta::new(5, 5);
    assert_eq!(delta.get(Team::TeamA), 15);
    assert_eq!(delta.get(Team::TeamB), -15);
    assert_eq!(
        ScoreDelta::new(i32::MAX, 0) + ScoreDelta::new(1, 0),
        ScoreDelta::new(i32::MAX, 0)
    );
}
