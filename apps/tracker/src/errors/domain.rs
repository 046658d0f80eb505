//! Domain-level error type used across services and adapters.
//!
//! This error type is storage- and presentation-agnostic. Command handlers
//! return `Result<T, crate::error::TrackerError>` and convert from
//! `DomainError` using the provided `From<DomainError> for TrackerError`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation error kinds for rejected input
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Trick totals for the round do not reconcile.
    InvalidRound,
    /// A bid or win is outside the legal range.
    BidOutOfRange,
    /// Input has the wrong number of entries for the seated players.
    PlayerCountMismatch,
    /// Command is not legal in the current phase.
    PhaseMismatch,
    Other(String),
}

/// Configuration error kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigKind {
    PlayerCount,
    DeckCount,
    BagThreshold,
    /// A runtime setting (environment variable) could not be parsed.
    Setting(String),
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or game rule violation
    Validation(ValidationKind, String),
    /// Rejected setup or runtime configuration
    Config(ConfigKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Config(kind, d) => write!(f, "config error {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }
    pub fn config(kind: ConfigKind, detail: impl Into<String>) -> Self {
        Self::Config(kind, detail.into())
    }
    pub fn phase_mismatch(detail: impl Into<String>) -> Self {
        Self::Validation(ValidationKind::PhaseMismatch, detail.into())
    }
}
