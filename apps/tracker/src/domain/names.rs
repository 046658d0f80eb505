use unicode_normalization::UnicodeNormalization;

use crate::domain::rules::default_player_name;
use crate::errors::domain::{DomainError, ValidationKind};

/// Normalize a single display name: trim and apply Unicode NFKC so visually
/// identical names compare equal.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().nfkc().collect::<String>()
}

/// Normalize the names entered for a table of `player_count` seats.
///
/// Blank entries become "Player N". Duplicate names are allowed; seats are
/// addressed by index.
pub fn normalize_player_names(
    names: &[String],
    player_count: u8,
) -> Result<Vec<String>, DomainError> {
    if names.len() != usize::from(player_count) {
        return Err(DomainError::validation(
            ValidationKind::PlayerCountMismatch,
            format!("expected {player_count} player names, got {}", names.len()),
        ));
    }
    Ok(names
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            let name = normalize_name(raw);
            if name.is_empty() {
                default_player_name(i)
            } else {
                name
            }
        })
        .collect())
}
