use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::domain::{ConfigKind, DomainError};

pub const SAVE_FILE_VAR: &str = "SPADES_SAVE_FILE";
pub const SUMMARY_DELAY_VAR: &str = "SPADES_SUMMARY_DELAY_MS";
pub const LOG_FORMAT_VAR: &str = "SPADES_LOG_FORMAT";

pub const DEFAULT_SAVE_FILE: &str = "spades_game_state.json";

/// Log output format for the binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(DomainError::config(
                ConfigKind::Setting(LOG_FORMAT_VAR.into()),
                format!("{LOG_FORMAT_VAR} must be 'pretty' or 'json', got '{other}'"),
            )),
        }
    }
}

/// Runtime settings for the tracker binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub save_file: PathBuf,
    /// Pause after showing a round summary; zero disables pacing.
    pub summary_delay: Duration,
    pub log_format: LogFormat,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            save_file: PathBuf::from(DEFAULT_SAVE_FILE),
            summary_delay: Duration::ZERO,
            log_format: LogFormat::Pretty,
        }
    }
}

impl TrackerConfig {
    /// Read settings from the environment, defaulting anything unset.
    pub fn from_env() -> Result<Self, DomainError> {
        let defaults = Self::default();
        Ok(Self {
            save_file: save_file().unwrap_or(defaults.save_file),
            summary_delay: summary_delay()?.unwrap_or(defaults.summary_delay),
            log_format: log_format()?.unwrap_or(defaults.log_format),
        })
    }

    pub fn with_save_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_file = path.into();
        self
    }
}

/// Non-empty environment variable, if set.
fn opt_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn save_file() -> Option<PathBuf> {
    opt_var(SAVE_FILE_VAR).map(PathBuf::from)
}

fn summary_delay() -> Result<Option<Duration>, DomainError> {
    let Some(raw) = opt_var(SUMMARY_DELAY_VAR) else {
        return Ok(None);
    };
    raw.parse::<u64>().map(Duration::from_millis).map(Some).map_err(|_| {
        DomainError::config(
            ConfigKind::Setting(SUMMARY_DELAY_VAR.into()),
            format!("{SUMMARY_DELAY_VAR} must be a whole number of milliseconds, got '{raw}'"),
        )
    })
}

fn log_format() -> Result<Option<LogFormat>, DomainError> {
    opt_var(LOG_FORMAT_VAR).map(|raw| raw.parse()).transpose()
}
