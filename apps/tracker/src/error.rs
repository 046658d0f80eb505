use thiserror::Error;

use crate::errors::domain::{ConfigKind, DomainError, ValidationKind};
use crate::errors::ErrorCode;
use crate::repos::snapshots::PersistenceError;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { code: ErrorCode, detail: String },
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
    #[error("Export error: {0}")]
    Export(#[from] csv::Error),
    #[error("View could not be rendered: {0}")]
    Render(#[from] serde_json::Error),
}

impl TrackerError {
    /// Error code for this error, as shown to the user.
    pub fn code(&self) -> ErrorCode {
        match self {
            TrackerError::Validation { code, .. } => *code,
            TrackerError::Config { code, .. } => *code,
            TrackerError::Persistence(PersistenceError::Inconsistent(_)) => {
                ErrorCode::DataCorruption
            }
            TrackerError::Persistence(_) => ErrorCode::PersistenceError,
            TrackerError::Export(_) => ErrorCode::ExportError,
            TrackerError::Render(_) => ErrorCode::RenderError,
        }
    }

    /// Human-readable detail without the category prefix.
    pub fn detail(&self) -> String {
        match self {
            TrackerError::Validation { detail, .. } => detail.clone(),
            TrackerError::Config { detail, .. } => detail.clone(),
            TrackerError::Persistence(e) => e.to_string(),
            TrackerError::Export(e) => e.to_string(),
            TrackerError::Render(e) => format!("view could not be rendered: {e}"),
        }
    }

    /// True for errors where the user only needs to correct their input.
    pub fn is_validation(&self) -> bool {
        matches!(self, TrackerError::Validation { .. })
    }
}

impl From<DomainError> for TrackerError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::InvalidRound => ErrorCode::InvalidRound,
                    ValidationKind::BidOutOfRange => ErrorCode::InvalidBid,
                    ValidationKind::PlayerCountMismatch => ErrorCode::PlayerCountMismatch,
                    ValidationKind::PhaseMismatch => ErrorCode::PhaseMismatch,
                    ValidationKind::Other(_) => ErrorCode::ValidationError,
                };
                TrackerError::Validation { code, detail }
            }
            DomainError::Config(kind, detail) => {
                let code = match kind {
                    ConfigKind::PlayerCount => ErrorCode::InvalidPlayerCount,
                    ConfigKind::DeckCount => ErrorCode::InvalidDeckCount,
                    ConfigKind::BagThreshold => ErrorCode::InvalidBagThreshold,
                    ConfigKind::Setting(_) | ConfigKind::Other(_) => ErrorCode::ConfigError,
                };
                TrackerError::Config { code, detail }
            }
        }
    }
}
