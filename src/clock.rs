//! Sources of "now" for recording reviews.
//!
//! A review must use a single instant both for computing the next review date
//! and for the card's last-reviewed stamp, so callers read the clock once per
//! review and pass the value down.

use chrono::{DateTime, Duration, Utc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that stays put until told to move. Lets a user (or a test) step
/// through days to see which cards come due.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedClock {
    current: DateTime<Utc>,
}

impl SimulatedClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { current: start }
    }

    /// Advances the current date by 24 hours.
    pub fn advance_day(&mut self) {
        self.advance_days(1);
    }

    pub fn advance_days(&mut self, days: u32) {
        self.current += Duration::days(i64::from(days));
    }
}

impl Clock for SimulatedClock {
    fn now(&self) -> DateTime<Utc> {
        self.current
    }
}
