//! Error types for the scheduler and its helpers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchedulerError {
    /// A difficulty string outside again/hard/good/easy.
    #[error("invalid difficulty '{0}', expected one of: again, hard, good, easy")]
    InvalidDifficulty(String),

    #[error("next review date out of range: {interval_days} days after {now}")]
    DateOutOfRange {
        now: chrono::DateTime<chrono::Utc>,
        interval_days: u32,
    },

    #[error("invalid scheduling policy: {0}")]
    Config(String),

    #[error("failed to read policy file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse policy file: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
