use std::ops::RangeInclusive;

pub const MIN_PLAYERS: u8 = 2;
pub const MAX_PLAYERS: u8 = 8;
pub const MIN_DECKS: u8 = 1;
pub const CARDS_PER_DECK: u32 = 52;
/// Most tricks a single player can bid or win in one round.
pub const MAX_TRICKS: u8 = 13;
pub const MAX_ROUNDS: u8 = 13;
/// Bags that trigger a penalty. Canonical rule set: 10 bags cost 100 points.
pub const BAG_THRESHOLD: u8 = 10;

/// Number of rounds in a game for the given table.
///
/// `min(13, floor(52 * decks / players), 13 * decks)`. Callers validate the
/// counts first; a zero player count yields zero rounds.
pub fn total_rounds(player_count: u8, deck_count: u8) -> u8 {
    if player_count == 0 {
        return 0;
    }
    let per_deal = CARDS_PER_DECK * u32::from(deck_count) / u32::from(player_count);
    let by_decks = u32::from(MAX_TRICKS) * u32::from(deck_count);
    let rounds = u32::from(MAX_ROUNDS).min(per_deal).min(by_decks);
    // Bounded above by MAX_ROUNDS.
    rounds as u8
}

/// Points lost each time a player's bags reach `threshold`.
pub fn bag_penalty(threshold: u8) -> i32 {
    10 * i32::from(threshold)
}

pub fn valid_bid_range() -> RangeInclusive<u8> {
    0..=MAX_TRICKS
}

/// Default display name for a 0-based seat.
pub fn default_player_name(index: usize) -> String {
    format!("Player {}", index + 1)
}
