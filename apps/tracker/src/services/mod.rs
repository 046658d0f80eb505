//! Services: the command surface over domain logic and storage.

pub mod game_session;
pub mod pacing;

pub use game_session::{CommandReply, GameSession};
pub use pacing::{continue_after_summary, pacer_for, DelayPacing, NoPacing, SummaryPacer};
