use serde::{Deserialize, Serialize};

use crate::domain::ledger::HistoryLedger;
use crate::domain::rules::{total_rounds, BAG_THRESHOLD, MAX_PLAYERS, MIN_DECKS, MIN_PLAYERS};
use crate::domain::scoring::RoundScore;
use crate::errors::domain::{ConfigKind, DomainError};

pub type PlayerIndex = u8; // 0..player_count

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No table configured yet.
    Setup,
    /// Table configured; waiting for player names.
    NameEntry,
    /// Waiting for bids and tricks won for `round_no`.
    Playing,
    /// A round was just applied; its results are on display.
    RoundSummary,
    /// All rounds played.
    Finished,
}

impl Phase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::NameEntry => "name_entry",
            Phase::Playing => "playing",
            Phase::RoundSummary => "round_summary",
            Phase::Finished => "finished",
        }
    }
}

/// Table parameters fixed when the game is set up.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    player_count: u8,
    deck_count: u8,
    bags_enabled: bool,
    total_rounds: u8,
}

impl GameConfig {
    pub fn new(player_count: u8, deck_count: u8, bags_enabled: bool) -> Result<Self, DomainError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(DomainError::config(
                ConfigKind::PlayerCount,
                format!(
                    "player count must be between {MIN_PLAYERS} and {MAX_PLAYERS}, got {player_count}"
                ),
            ));
        }
        if deck_count < MIN_DECKS {
            return Err(DomainError::config(
                ConfigKind::DeckCount,
                format!("deck count must be at least {MIN_DECKS}, got {deck_count}"),
            ));
        }
        Ok(Self {
            player_count,
            deck_count,
            bags_enabled,
            total_rounds: total_rounds(player_count, deck_count),
        })
    }

    /// Re-run setup validation on a config that came from outside (a snapshot).
    pub fn revalidate(&self) -> Result<Self, DomainError> {
        let fresh = Self::new(self.player_count, self.deck_count, self.bags_enabled)?;
        if fresh.total_rounds != self.total_rounds {
            return Err(DomainError::config(
                ConfigKind::Other("total_rounds".into()),
                format!(
                    "stored total_rounds {} does not match {} for {} players / {} decks",
                    self.total_rounds, fresh.total_rounds, self.player_count, self.deck_count
                ),
            ));
        }
        Ok(fresh)
    }

    pub fn player_count(&self) -> u8 {
        self.player_count
    }

    pub fn deck_count(&self) -> u8 {
        self.deck_count
    }

    pub fn bags_enabled(&self) -> bool {
        self.bags_enabled
    }

    pub fn total_rounds(&self) -> u8 {
        self.total_rounds
    }

    pub fn bag_threshold(&self) -> u8 {
        BAG_THRESHOLD
    }
}

/// One player's running totals.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub score: i32,
    pub bags: u8,
}

/// Running totals for every seat, indexed by `PlayerIndex`.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ScoreState {
    players: Vec<PlayerScore>,
}

impl ScoreState {
    pub fn zeroed(player_count: usize) -> Self {
        Self {
            players: vec![PlayerScore::default(); player_count],
        }
    }

    /// Rebuild from the parallel `scores` / `bags` vectors of a snapshot.
    pub fn from_parts(scores: &[i32], bags: &[u8]) -> Option<Self> {
        if scores.len() != bags.len() {
            return None;
        }
        let players = scores
            .iter()
            .zip(bags)
            .map(|(&score, &bags)| PlayerScore { score, bags })
            .collect();
        Some(Self { players })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, index: PlayerIndex) -> Option<PlayerScore> {
        self.players.get(usize::from(index)).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerScore> {
        self.players.iter()
    }

    pub fn scores(&self) -> Vec<i32> {
        self.players.iter().map(|p| p.score).collect()
    }

    pub fn bags(&self) -> Vec<u8> {
        self.players.iter().map(|p| p.bags).collect()
    }

    /// Apply a scored round. The outcome must have been computed against
    /// this state's bags, so lengths always agree. Totals are range-checked
    /// by the controller before this runs.
    pub fn apply(&mut self, outcome: &RoundScore) {
        debug_assert_eq!(outcome.deltas.len(), self.players.len());
        for ((player, delta), bags) in self
            .players
            .iter_mut()
            .zip(&outcome.deltas)
            .zip(&outcome.new_bags)
        {
            player.score = player.score.saturating_add(*delta);
            player.bags = *bags;
        }
    }
}

/// Entire session container, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub phase: Phase,
    /// Frozen at Setup -> NameEntry; `None` only in Setup.
    pub config: Option<GameConfig>,
    /// Seat names, index-addressable. Empty until names are entered.
    pub players: Vec<String>,
    pub scores: ScoreState,
    /// 1-based number of the round currently being played (or next to play).
    pub round_no: u8,
    pub show_scoreboard: bool,
    pub history: HistoryLedger,
}

impl GameState {
    pub fn fresh() -> Self {
        Self {
            phase: Phase::Setup,
            config: None,
            players: Vec::new(),
            scores: ScoreState::default(),
            round_no: 1,
            show_scoreboard: false,
            history: HistoryLedger::default(),
        }
    }

    pub fn player_name(&self, index: PlayerIndex) -> Option<&str> {
        self.players.get(usize::from(index)).map(String::as_str)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::fresh()
    }
}

pub fn require_config(state: &GameState, ctx: &'static str) -> Result<GameConfig, DomainError> {
    state.config.ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: config must be set ({ctx})"))
    })
}

pub fn require_phase(state: &GameState, expected: Phase, ctx: &'static str) -> Result<(), DomainError> {
    if state.phase != expected {
        return Err(DomainError::phase_mismatch(format!(
            "{ctx} requires phase {}, current phase is {}",
            expected.as_str(),
            state.phase.as_str()
        )));
    }
    Ok(())
}
