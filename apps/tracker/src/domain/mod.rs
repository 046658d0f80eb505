//! Domain layer: pure scoring rules, session state and history.

pub mod ledger;
pub mod names;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use ledger::{HistoryLedger, RoundRecord};
pub use rules::{total_rounds, BAG_THRESHOLD};
pub use scoring::{score_round, RoundScore};
pub use snapshot::Snapshot;
pub use state::{GameConfig, GameState, Phase, PlayerIndex, PlayerScore, ScoreState};
pub use view::{game_view, GameView, RoundSummaryView, Standing};
