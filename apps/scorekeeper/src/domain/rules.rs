pub const PLAYERS: usize = 4;
pub const PLAYERS_PER_TEAM: usize = 2;

/// First team at or above this total wins the match.
pub const TARGET_SCORE: i32 = 1000;

/// Card points distributed in every round that is not a double victory.
pub const CARD_POINTS_TOTAL: i32 = 100;

/// Flat award for a double victory; the other team scores nothing from cards.
pub const DOUBLE_VICTORY_POINTS: i32 = 200;

pub const TICHU_BONUS: i32 = 100;
pub const GRAND_TICHU_BONUS: i32 = 200;

/// Card points the other team must have taken, for auto-completing entry.
pub fn complementary_card_points(points: i32) -> Option<i32> {
    (points <= CARD_POINTS_TOTAL).then(|| CARD_POINTS_TOTAL - points)
}
