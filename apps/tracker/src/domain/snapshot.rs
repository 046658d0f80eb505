//! Persisted form of a session.
//!
//! A flat, keyed record (`config`, `players`, `scores`, `bags`, `round`,
//! `phase`, `show_scoreboard`, `history`) that round-trips every field the
//! controller consumes. Restoring re-checks the invariants the controller
//! relies on, so a hand-edited or truncated snapshot is refused instead of
//! producing a half-valid session.

use serde::{Deserialize, Serialize};

use crate::domain::ledger::{HistoryLedger, RoundRecord};
use crate::domain::state::{GameConfig, GameState, Phase, ScoreState};
use crate::errors::domain::DomainError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub config: Option<GameConfig>,
    #[serde(default)]
    pub players: Vec<String>,
    #[serde(default)]
    pub scores: Vec<i32>,
    #[serde(default)]
    pub bags: Vec<u8>,
    pub round: u8,
    pub phase: Phase,
    #[serde(default)]
    pub show_scoreboard: bool,
    #[serde(default)]
    pub history: Vec<RoundRecord>,
    /// RFC 3339 timestamp of the write; informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            config: state.config,
            players: state.players.clone(),
            scores: state.scores.scores(),
            bags: state.scores.bags(),
            round: state.round_no,
            phase: state.phase,
            show_scoreboard: state.show_scoreboard,
            history: state.history.all_records().to_vec(),
            saved_at: None,
        }
    }

    pub fn with_saved_at(mut self, saved_at: impl Into<String>) -> Self {
        self.saved_at = Some(saved_at.into());
        self
    }

    /// Rebuild a session state, refusing snapshots that break invariants.
    pub fn restore(self) -> Result<GameState, DomainError> {
        if self.round == 0 {
            return Err(inconsistent("round must be at least 1"));
        }

        let Some(stored_config) = self.config else {
            if self.phase != Phase::Setup {
                return Err(inconsistent(format!(
                    "phase {} requires a config",
                    self.phase.as_str()
                )));
            }
            if !self.players.is_empty() || !self.scores.is_empty() || !self.history.is_empty() {
                return Err(inconsistent("setup snapshot carries game data"));
            }
            return Ok(GameState {
                show_scoreboard: self.show_scoreboard,
                ..GameState::fresh()
            });
        };

        let config = stored_config
            .revalidate()
            .map_err(|e| inconsistent(e.to_string()))?;
        let seats = usize::from(config.player_count());
        let total = config.total_rounds();

        match self.phase {
            Phase::Setup => return Err(inconsistent("setup snapshot carries a config")),
            Phase::NameEntry => {
                if !self.players.is_empty() || !self.scores.is_empty() || !self.history.is_empty() {
                    return Err(inconsistent("name entry snapshot carries game data"));
                }
                if self.round != 1 {
                    return Err(inconsistent("name entry snapshot must be at round 1"));
                }
            }
            Phase::Playing if self.round > total => {
                return Err(inconsistent(format!(
                    "playing round {} exceeds total rounds {total}",
                    self.round
                )));
            }
            Phase::RoundSummary if self.round < 2 || self.round > total => {
                return Err(inconsistent(format!(
                    "round summary cannot be at round {}",
                    self.round
                )));
            }
            Phase::Finished if self.round <= total => {
                return Err(inconsistent(format!(
                    "finished at round {} but total rounds is {total}",
                    self.round
                )));
            }
            Phase::Playing | Phase::RoundSummary | Phase::Finished => {
                let lengths = [self.players.len(), self.scores.len(), self.bags.len()];
                if lengths.iter().any(|&n| n != seats) {
                    return Err(inconsistent(format!(
                        "expected {seats} players, scores and bags; got {}, {}, {}",
                        self.players.len(),
                        self.scores.len(),
                        self.bags.len()
                    )));
                }
            }
        }

        let completed = usize::from(self.round - 1);
        if self.history.len() != completed * seats {
            return Err(inconsistent(format!(
                "history has {} records, expected {} for {completed} completed rounds",
                self.history.len(),
                completed * seats
            )));
        }
        let out_of_range = |r: &&RoundRecord| {
            usize::from(r.player_index) >= seats || r.round_number == 0 || r.round_number >= self.round
        };
        if let Some(r) = self.history.iter().find(out_of_range) {
            return Err(inconsistent(format!(
                "history record for round {} seat {} is out of range",
                r.round_number, r.player_index
            )));
        }
        if config.bags_enabled() && self.bags.iter().any(|&b| b >= config.bag_threshold()) {
            return Err(inconsistent("bag count at or above the penalty threshold"));
        }
        if !config.bags_enabled() && self.bags.iter().any(|&b| b != 0) {
            return Err(inconsistent("bags recorded while bags are disabled"));
        }
        if self.phase != Phase::NameEntry {
            check_running_totals(&self.history, seats, self.round, &self.scores)?;
        }

        let scores = if self.phase == Phase::NameEntry {
            ScoreState::default()
        } else {
            ScoreState::from_parts(&self.scores, &self.bags)
                .ok_or_else(|| inconsistent("scores and bags differ in length"))?
        };

        Ok(GameState {
            phase: self.phase,
            config: Some(config),
            players: self.players,
            scores,
            round_no: self.round,
            show_scoreboard: self.show_scoreboard,
            history: HistoryLedger::from_records(self.history),
        })
    }
}

/// Every completed round holds exactly one record per seat, each record's
/// total follows from the previous one, and the final totals are the scores.
fn check_running_totals(
    history: &[RoundRecord],
    seats: usize,
    round: u8,
    scores: &[i32],
) -> Result<(), DomainError> {
    let mut totals = vec![0i32; seats];
    for round_number in 1..round {
        let mut seen = vec![false; seats];
        for r in history.iter().filter(|r| r.round_number == round_number) {
            let seat = usize::from(r.player_index);
            if std::mem::replace(&mut seen[seat], true) {
                return Err(inconsistent(format!(
                    "round {round_number} has more than one record for seat {seat}"
                )));
            }
            let expected = totals[seat]
                .checked_add(r.round_points)
                .ok_or_else(|| inconsistent(format!("seat {seat} total overflows")))?;
            if r.total_points_after != expected {
                return Err(inconsistent(format!(
                    "round {round_number} seat {seat} total is {}, expected {expected}",
                    r.total_points_after
                )));
            }
            totals[seat] = expected;
        }
        if let Some(seat) = seen.iter().position(|&s| !s) {
            return Err(inconsistent(format!(
                "round {round_number} has no record for seat {seat}"
            )));
        }
    }
    if scores != totals.as_slice() {
        return Err(inconsistent(format!(
            "scores {scores:?} disagree with history totals {totals:?}"
        )));
    }
    Ok(())
}

fn inconsistent(detail: impl Into<String>) -> DomainError {
    DomainError::validation_other(format!("inconsistent snapshot: {}", detail.into()))
}
