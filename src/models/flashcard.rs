//! Flashcard is a pair <term, definition> plus its review schedule
use super::{Difficulty, ReviewData, ReviewOutcome, ReviewScheduler};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Flashcard {
    pub term: String,
    pub definition: String,
    #[serde(default)]
    pub review: ReviewData,
}

impl Flashcard {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            review: ReviewData::default(),
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.review.is_due(now)
    }

    /// Schedules the card after a review at `now` and stores the result.
    /// `now` becomes the card's last-reviewed stamp.
    ///
    /// A missing interval or ease falls back to the policy's initial value.
    /// On error the card is left unchanged.
    pub fn record_review(
        &mut self,
        scheduler: &ReviewScheduler,
        difficulty: Difficulty,
        now: DateTime<Utc>,
    ) -> Result<ReviewOutcome> {
        let outcome = scheduler.next_review(
            difficulty,
            self.review.interval_days,
            self.review.ease,
            now,
        )?;

        self.review.interval_days = Some(outcome.interval);
        self.review.ease = Some(outcome.ease);
        self.review.next_review_date = Some(outcome.next_review_date);
        self.review.last_reviewed = Some(now);

        Ok(outcome)
    }
}
