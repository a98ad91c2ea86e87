//! Subjective recall rating given by the user after seeing a card's answer.
use crate::error::SchedulerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered from worst to best recall: `Again < Hard < Good < Easy`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Forgotten.
    Again,
    /// Recalled with noticeable effort.
    Hard,
    /// Recalled normally.
    Good,
    /// Recalled effortlessly.
    Easy,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Again,
        Difficulty::Hard,
        Difficulty::Good,
        Difficulty::Easy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Again => "again",
            Difficulty::Hard => "hard",
            Difficulty::Good => "good",
            Difficulty::Easy => "easy",
        }
    }

    /// Whether the card was recalled at all. Only `Again` counts as a lapse.
    pub fn is_recalled(&self) -> bool {
        !matches!(self, Difficulty::Again)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "again" => Ok(Difficulty::Again),
            "hard" => Ok(Difficulty::Hard),
            "good" => Ok(Difficulty::Good),
            "easy" => Ok(Difficulty::Easy),
            _ => Err(SchedulerError::InvalidDifficulty(s.to_string())),
        }
    }
}
