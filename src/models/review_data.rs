use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scheduling state stored alongside a card.
///
/// `interval_days` and `ease` stay `None` until the card is first scheduled;
/// the scheduler then starts from its policy's initial values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewData {
    pub interval_days: Option<u32>,
    pub ease: Option<f64>,
    pub last_reviewed: Option<DateTime<Utc>>,
    /// `None` until the card is reviewed for the first time.
    pub next_review_date: Option<DateTime<Utc>>,
}

impl ReviewData {
    /// Never scheduled, or the scheduled date has been reached.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review_date.is_none_or(|date| date <= now)
    }
}

/// Result of a single scheduling computation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewOutcome {
    pub interval: u32,
    pub ease: f64,
    pub next_review_date: DateTime<Utc>,
}
