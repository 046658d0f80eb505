#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod repos;
pub mod services;


// Re-exports for public API
pub use adapters::{JsonFileStore, MemoryStore};
pub use config::{LogFormat, TrackerConfig};
pub use domain::{GameConfig, GameView, Phase, RoundRecord};
pub use error::TrackerError;
pub use errors::ErrorCode;
pub use repos::{PersistenceError, SnapshotStore};
pub use services::{CommandReply, GameSession};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
