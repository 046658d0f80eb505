//! Public view of a session for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::domain::ledger::RoundRecord;
use crate::domain::rules::default_player_name;
use crate::domain::state::{GameState, Phase, PlayerIndex, ScoreState};

/// A seat's running totals as shown on the scoreboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub index: PlayerIndex,
    pub name: String,
    pub score: i32,
    pub bags: u8,
}

/// Results of the most recently completed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummaryView {
    pub round_no: u8,
    pub lines: Vec<RoundRecord>,
    /// Seats that paid a bag penalty in this round.
    pub penalized: Vec<PlayerIndex>,
}

/// Everything the presentation layer needs to render the current phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub phase: Phase,
    pub round_no: u8,
    pub total_rounds: Option<u8>,
    pub bags_enabled: bool,
    pub show_scoreboard: bool,
    pub standings: Vec<Standing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_round: Option<RoundSummaryView>,
    /// Seats tied for the highest score.
    pub leaders: Vec<PlayerIndex>,
}

/// Build the view. Never panics; missing names fall back to seat names.
pub fn game_view(state: &GameState) -> GameView {
    let standings = state
        .scores
        .iter()
        .enumerate()
        .map(|(i, s)| Standing {
            index: i as PlayerIndex,
            name: state
                .players
                .get(i)
                .cloned()
                .unwrap_or_else(|| default_player_name(i)),
            score: s.score,
            bags: s.bags,
        })
        .collect();

    GameView {
        phase: state.phase,
        round_no: state.round_no,
        total_rounds: state.config.map(|c| c.total_rounds()),
        bags_enabled: state.config.is_some_and(|c| c.bags_enabled()),
        show_scoreboard: state.show_scoreboard,
        standings,
        last_round: last_round_summary(state),
        leaders: leaders(&state.scores),
    }
}

fn last_round_summary(state: &GameState) -> Option<RoundSummaryView> {
    let round_no = state.history.last_round_number()?;
    let lines: Vec<RoundRecord> = state
        .history
        .records_for_round(round_no)
        .into_iter()
        .cloned()
        .collect();
    let penalized = lines
        .iter()
        .filter(|r| r.bag_penalties > 0)
        .map(|r| r.player_index)
        .collect();
    Some(RoundSummaryView {
        round_no,
        lines,
        penalized,
    })
}

/// Seats holding the top score; ties share the lead.
pub fn leaders(scores: &ScoreState) -> Vec<PlayerIndex> {
    let Some(top) = scores.iter().map(|s| s.score).max() else {
        return Vec::new();
    };
    scores
        .iter()
        .enumerate()
        .filter(|(_, s)| s.score == top)
        .map(|(i, _)| i as PlayerIndex)
        .collect()
}
