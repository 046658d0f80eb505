//! Error codes for the score tracker.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! printed by the command surface.

use core::fmt;

/// Centralized error codes for the score tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Round Validation
    /// Trick totals do not reconcile
    InvalidRound,
    /// Bid or win outside 0..=13
    InvalidBid,
    /// Wrong number of bids, wins or names
    PlayerCountMismatch,
    /// Command not allowed in the current phase
    PhaseMismatch,
    /// General validation error
    ValidationError,

    // Setup / Configuration
    /// Player count outside the supported range
    InvalidPlayerCount,
    /// Deck count below one
    InvalidDeckCount,
    /// Bag threshold must be positive
    InvalidBagThreshold,
    /// Configuration error
    ConfigError,

    // Persistence & Export
    /// Snapshot could not be read or written
    PersistenceError,
    /// Snapshot was readable but inconsistent
    DataCorruption,
    /// History export failed
    ExportError,
    /// Game view could not be rendered
    RenderError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidRound => "INVALID_ROUND",
            Self::InvalidBid => "INVALID_BID",
            Self::PlayerCountMismatch => "PLAYER_COUNT_MISMATCH",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::InvalidDeckCount => "INVALID_DECK_COUNT",
            Self::InvalidBagThreshold => "INVALID_BAG_THRESHOLD",
            Self::ConfigError => "CONFIG_ERROR",

            Self::PersistenceError => "PERSISTENCE_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::ExportError => "EXPORT_ERROR",
            Self::RenderError => "RENDER_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
