//! Game phase controller.
//!
//! `GameSession` owns the session state and its snapshot store. Every command
//! validates against the current phase, computes the full result before
//! touching state, then applies it and saves. A failed save never rolls back
//! the in-memory state; it comes back as a warning on the reply.

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::domain::names::normalize_player_names;
use crate::domain::scoring::score_round;
use crate::domain::state::{require_config, require_phase};
use crate::domain::{
    game_view, GameConfig, GameState, GameView, HistoryLedger, Phase, RoundRecord, RoundScore,
    ScoreState, Snapshot,
};
use crate::error::TrackerError;
use crate::errors::domain::DomainError;
use crate::repos::snapshots::{PersistenceError, SnapshotStore};

/// Outcome of a successful command.
#[derive(Debug)]
pub struct CommandReply {
    pub view: GameView,
    /// Set when the new state could not be persisted.
    pub warning: Option<PersistenceError>,
}

pub struct GameSession<S: SnapshotStore> {
    state: GameState,
    store: S,
}

impl<S: SnapshotStore> GameSession<S> {
    /// Start a brand-new session without consulting the store.
    pub fn fresh(store: S) -> Self {
        Self {
            state: GameState::fresh(),
            store,
        }
    }

    /// Restore from the store, falling back to a fresh session.
    ///
    /// Never fails: an unreadable or inconsistent snapshot is reported in the
    /// second tuple element and otherwise treated as absent.
    pub fn open(store: S) -> (Self, Option<PersistenceError>) {
        let restored = store.load().and_then(|snapshot| {
            snapshot
                .map(|s| {
                    s.restore()
                        .map_err(|e| PersistenceError::Inconsistent(e.to_string()))
                })
                .transpose()
        });

        match restored {
            Ok(Some(state)) => {
                info!(
                    phase = state.phase.as_str(),
                    round = state.round_no,
                    "Session restored from snapshot"
                );
                (Self { state, store }, None)
            }
            Ok(None) => {
                debug!("No snapshot found; starting fresh session");
                (Self::fresh(store), None)
            }
            Err(e) => {
                warn!(error = %e, "Ignoring unusable snapshot; starting fresh session");
                (Self::fresh(store), Some(e))
            }
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn view(&self) -> GameView {
        game_view(&self.state)
    }

    pub fn ledger(&self) -> &HistoryLedger {
        &self.state.history
    }

    /// Setup -> NameEntry: validate and freeze the table configuration.
    pub fn new_game(
        &mut self,
        player_count: u8,
        deck_count: u8,
        bags_enabled: bool,
    ) -> Result<CommandReply, TrackerError> {
        require_phase(&self.state, Phase::Setup, "new game")?;
        let config = GameConfig::new(player_count, deck_count, bags_enabled)?;

        self.state.config = Some(config);
        self.state.phase = Phase::NameEntry;
        info!(
            players = player_count,
            decks = deck_count,
            bags = bags_enabled,
            total_rounds = config.total_rounds(),
            "Transition: Setup -> NameEntry"
        );
        Ok(self.commit())
    }

    /// NameEntry -> Playing: seat the players and zero their scores.
    pub fn set_player_names(&mut self, names: &[String]) -> Result<CommandReply, TrackerError> {
        require_phase(&self.state, Phase::NameEntry, "set player names")?;
        let config = require_config(&self.state, "set player names")?;
        let players = normalize_player_names(names, config.player_count())?;

        self.state.scores = ScoreState::zeroed(players.len());
        self.state.players = players;
        self.state.round_no = 1;
        self.state.phase = Phase::Playing;
        info!(players = ?self.state.players, "Transition: NameEntry -> Playing");
        Ok(self.commit())
    }

    /// Score and apply one round.
    ///
    /// On any validation failure nothing changes. Submitting the same input
    /// twice (once per round) applies it twice; there is no deduplication.
    pub fn submit_round(&mut self, bids: &[u8], wins: &[u8]) -> Result<CommandReply, TrackerError> {
        require_phase(&self.state, Phase::Playing, "submit round")?;
        let config = require_config(&self.state, "submit round")?;

        let prior_bags = self.state.scores.bags();
        let outcome = score_round(
            bids,
            wins,
            &prior_bags,
            config.bags_enabled(),
            config.bag_threshold(),
        )?;
        let round_no = self.state.round_no;
        let records = self.round_records(round_no, bids, wins, &outcome, config.bags_enabled())?;

        self.state.scores.apply(&outcome);
        for record in records {
            self.state.history.append(record);
        }
        self.state.round_no = round_no.saturating_add(1);
        self.state.phase = if self.state.round_no > config.total_rounds() {
            Phase::Finished
        } else {
            Phase::RoundSummary
        };

        debug!(round = round_no, deltas = ?outcome.deltas, bags = ?outcome.new_bags, "Round scored");
        for seat in outcome.penalized() {
            info!(round = round_no, seat, "Bag penalty applied");
        }
        info!(
            round = round_no,
            "Transition: Playing -> {}",
            self.state.phase.as_str()
        );
        Ok(self.commit())
    }

    /// RoundSummary -> Playing.
    pub fn finish_summary(&mut self) -> Result<CommandReply, TrackerError> {
        require_phase(&self.state, Phase::RoundSummary, "finish round summary")?;
        self.state.phase = Phase::Playing;
        debug!(round = self.state.round_no, "Transition: RoundSummary -> Playing");
        Ok(self.commit())
    }

    /// Flip scoreboard visibility. Available once a table is configured.
    pub fn toggle_scoreboard(&mut self) -> Result<CommandReply, TrackerError> {
        if self.state.phase == Phase::Setup {
            return Err(DomainError::phase_mismatch(
                "toggle scoreboard requires a configured game, current phase is setup",
            )
            .into());
        }
        self.state.show_scoreboard = !self.state.show_scoreboard;
        debug!(show = self.state.show_scoreboard, "Scoreboard toggled");
        Ok(self.commit())
    }

    /// Any -> Setup: drop everything and remove the persisted snapshot.
    pub fn restart(&mut self) -> Result<CommandReply, TrackerError> {
        self.state = GameState::fresh();
        info!("Transition: restart -> Setup");
        let warning = self.store.clear().err();
        if let Some(e) = &warning {
            warn!(error = %e, "Failed to remove snapshot on restart");
        }
        Ok(CommandReply {
            view: self.view(),
            warning,
        })
    }

    /// CSV dump of the history ledger for download.
    pub fn export_history(&self) -> Result<Vec<u8>, TrackerError> {
        let include_bags = self.state.config.is_some_and(|c| c.bags_enabled());
        Ok(self.state.history.export(&self.state.players, include_bags)?)
    }

    /// Persist the current state. Failures are logged and returned, never raised.
    pub fn save(&self) -> Result<(), PersistenceError> {
        let saved_at = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| String::from("unknown"));
        let snapshot = Snapshot::capture(&self.state).with_saved_at(saved_at);
        self.store.save(&snapshot)
    }

    fn commit(&self) -> CommandReply {
        let warning = self.save().err();
        if let Some(e) = &warning {
            warn!(error = %e, "Failed to persist snapshot; in-memory state remains authoritative");
        }
        CommandReply {
            view: self.view(),
            warning,
        }
    }

    fn round_records(
        &self,
        round_no: u8,
        bids: &[u8],
        wins: &[u8],
        outcome: &RoundScore,
        bags_enabled: bool,
    ) -> Result<Vec<RoundRecord>, DomainError> {
        let mut records = Vec::with_capacity(bids.len());
        for (i, ((&bid, &won), &delta)) in bids.iter().zip(wins).zip(&outcome.deltas).enumerate() {
            let prior = self
                .state
                .scores
                .get(i as u8)
                .ok_or_else(|| DomainError::validation_other(format!("no score for seat {i}")))?;
            let total_points_after = prior.score.checked_add(delta).ok_or_else(|| {
                DomainError::validation_other(format!("score for seat {i} is out of range"))
            })?;
            records.push(RoundRecord {
                round_number: round_no,
                player_index: i as u8,
                bid,
                won,
                round_points: delta,
                total_points_after,
                bags_after: bags_enabled.then(|| outcome.new_bags[i]),
                bag_penalties: outcome.penalties[i],
            });
        }
        Ok(records)
    }
}
