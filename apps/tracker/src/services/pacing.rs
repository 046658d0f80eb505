//! Presentation pacing between a round summary and the next round.
//!
//! Purely advisory: the controller never waits on a pacer, and scoring
//! results are identical with or without one.

use std::time::Duration;

use crate::domain::view::RoundSummaryView;
use crate::domain::Phase;
use crate::error::TrackerError;
use crate::repos::snapshots::SnapshotStore;
use crate::services::game_session::{CommandReply, GameSession};

pub trait SummaryPacer {
    /// Called with the summary just before the session moves on.
    fn pace(&self, summary: Option<&RoundSummaryView>);
}

/// Continue immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPacing;

impl SummaryPacer for NoPacing {
    fn pace(&self, _summary: Option<&RoundSummaryView>) {}
}

/// Block the calling thread for a fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct DelayPacing {
    delay: Duration,
}

impl DelayPacing {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl SummaryPacer for DelayPacing {
    fn pace(&self, _summary: Option<&RoundSummaryView>) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}

/// Pick a pacer for a configured delay; zero means no pacing.
pub fn pacer_for(delay: Duration) -> Box<dyn SummaryPacer> {
    if delay.is_zero() {
        Box::new(NoPacing)
    } else {
        Box::new(DelayPacing::new(delay))
    }
}

/// If the session is showing a round summary, pace and move on to the next
/// round. Returns `None` when there was no summary to leave (e.g. the game
/// just finished).
pub fn continue_after_summary<S: SnapshotStore>(
    session: &mut GameSession<S>,
    pacer: &dyn SummaryPacer,
) -> Result<Option<CommandReply>, TrackerError> {
    if session.state().phase != Phase::RoundSummary {
        return Ok(None);
    }
    let view = session.view();
    pacer.pace(view.last_round.as_ref());
    session.finish_summary().map(Some)
}
