//! Seating four players before a match starts.

use unicode_normalization::UnicodeNormalization;

use crate::domain::rules::PLAYERS;
use crate::domain::state::{Player, Team};
use crate::errors::domain::DomainError;

/// Comparison key for player names.
///
/// Trimmed, NFKC normalized and lowercased, so "Åsa" typed with a combining
/// ring and "ÅSA" are the same player.
pub fn name_key(name: &str) -> String {
    name.trim().nfkc().collect::<String>().to_lowercase()
}

/// Validate names and arrange them around the table.
///
/// Seating alternates teams: `[TeamA#1, TeamB#1, TeamA#2, TeamB#2]`.
/// Seat 0 deals the first round.
pub fn seat_players(team_a: [&str; 2], team_b: [&str; 2]) -> Result<[Player; PLAYERS], DomainError> {
    let seated = [
        Player::new(team_a[0].trim(), Team::TeamA),
        Player::new(team_b[0].trim(), Team::TeamB),
        Player::new(team_a[1].trim(), Team::TeamA),
        Player::new(team_b[1].trim(), Team::TeamB),
    ];

    if let Some(seat) = seated.iter().position(|p| p.name.is_empty()) {
        return Err(DomainError::invalid_player_name(format!(
            "seat {seat} has no name"
        )));
    }

    let keys: Vec<String> = seated.iter().map(|p| name_key(&p.name)).collect();
    for (i, key) in keys.iter().enumerate() {
        if keys[..i].contains(key) {
            return Err(DomainError::DuplicatePlayerName(seated[i].name.clone()));
        }
    }

    Ok(seated)
}
