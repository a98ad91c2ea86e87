//! Review scheduling: a simplified SM-2 variant driven by four recall ratings.
//!
//! Each card carries an interval (days until the next review) and an ease
//! factor (how fast the interval grows):
//! - Again: interval resets to 1 day, ease drops by 0.2
//! - Hard: interval grows by 20%, ease drops by 0.15
//! - Good: interval is multiplied by the ease, ease is unchanged
//! - Easy: interval is multiplied by the ease and a 1.3 bonus, ease rises by 0.15
//!
//! Intervals are truncated to whole days and never go below 1. Ease never
//! goes below 1.3 and has no upper bound.

use super::{Difficulty, ReviewOutcome, SchedulingPolicy};
use crate::error::{Result, SchedulerError};
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

/// Computes the next review for a card using the default policy.
///
/// `current_interval` and `current_ease` fall back to 1 day and 2.5 for a
/// card that was never reviewed. `now` falls back to the current time; pass
/// the same instant that will be stored as the card's last review.
pub fn compute_next_review(
    difficulty: Difficulty,
    current_interval: Option<u32>,
    current_ease: Option<f64>,
    now: Option<DateTime<Utc>>,
) -> Result<ReviewOutcome> {
    let now = now.unwrap_or_else(Utc::now);
    ReviewScheduler::default().next_review(difficulty, current_interval, current_ease, now)
}

/// Stateless scheduler parameterised by a [`SchedulingPolicy`].
#[derive(Clone, Debug, Default)]
pub struct ReviewScheduler {
    policy: SchedulingPolicy,
}

impl ReviewScheduler {
    pub fn new(policy: SchedulingPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &SchedulingPolicy {
        &self.policy
    }

    pub fn next_review(
        &self,
        difficulty: Difficulty,
        current_interval: Option<u32>,
        current_ease: Option<f64>,
        now: DateTime<Utc>,
    ) -> Result<ReviewOutcome> {
        let interval = self.read_interval(current_interval);
        let ease = self.read_ease(current_ease);
        let p = &self.policy;

        let (raw_interval, new_ease) = match difficulty {
            Difficulty::Again => (1.0, (ease - p.again_ease_penalty).max(p.minimum_ease)),
            Difficulty::Hard => (
                (interval as f64 * p.hard_interval_multiplier).floor(),
                (ease - p.hard_ease_penalty).max(p.minimum_ease),
            ),
            Difficulty::Good => ((interval as f64 * ease).floor(), ease),
            Difficulty::Easy => (
                (interval as f64 * ease * p.easy_interval_multiplier).floor(),
                ease + p.easy_ease_bonus,
            ),
        };
        // `as` saturates at u32::MAX
        let new_interval = (raw_interval as u32).max(1);

        let next_review_date = Duration::try_days(i64::from(new_interval))
            .and_then(|offset| now.checked_add_signed(offset))
            .ok_or(SchedulerError::DateOutOfRange {
                now,
                interval_days: new_interval,
            })?;

        debug!(
            %difficulty,
            interval,
            ease,
            new_interval,
            new_ease,
            %next_review_date,
            "scheduled review"
        );

        Ok(ReviewOutcome {
            interval: new_interval,
            ease: new_ease,
            next_review_date,
        })
    }

    fn read_interval(&self, interval: Option<u32>) -> u32 {
        match interval {
            None => self.policy.initial_interval_days,
            Some(0) => {
                warn!("interval of 0 days is below the 1 day minimum, using 1");
                1
            }
            Some(days) => days,
        }
    }

    /// Stored ease is used only when finite and at or above the floor.
    /// Anything else, `+inf` included, reads as the floor.
    fn read_ease(&self, ease: Option<f64>) -> f64 {
        let floor = self.policy.minimum_ease;
        match ease {
            None => self.policy.initial_ease,
            Some(e) if e.is_finite() && e >= floor => e,
            Some(e) => {
                warn!(ease = e, floor, "ease outside valid range, clamping to floor");
                floor
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const DAY_MS: i64 = 24 * 60 * 60 * 1000;

    fn fixed_now() -> DateTime<Utc> {
        // 2022-01-01 00:00:00 UTC
        Utc.timestamp_millis_opt(1_640_995_200_000).unwrap()
    }

    fn review(difficulty: Difficulty, interval: u32, ease: f64) -> ReviewOutcome {
        compute_next_review(difficulty, Some(interval), Some(ease), Some(fixed_now())).unwrap()
    }

    #[test]
    fn test_again_resets_interval() {
        let result = review(Difficulty::Again, 5, 2.5);

        assert_eq!(result.interval, 1);
        assert_eq!(result.ease, 2.3);
        assert_eq!(
            result.next_review_date.timestamp_millis(),
            1_640_995_200_000 + DAY_MS
        );
    }

    #[test]
    fn test_hard_grows_interval_slightly() {
        let result = review(Difficulty::Hard, 5, 2.5);

        assert_eq!(result.interval, 6);
        assert_eq!(result.ease, 2.35);
        assert_eq!(
            result.next_review_date.timestamp_millis(),
            1_640_995_200_000 + 6 * DAY_MS
        );
    }

    #[test]
    fn test_good_multiplies_by_ease() {
        let result = review(Difficulty::Good, 3, 2.5);

        assert_eq!(result.interval, 7);
        assert_eq!(result.ease, 2.5);
        assert_eq!(
            result.next_review_date.timestamp_millis(),
            1_640_995_200_000 + 7 * DAY_MS
        );
    }

    #[test]
    fn test_easy_grows_interval_and_ease() {
        let result = review(Difficulty::Easy, 3, 2.5);

        assert_eq!(result.interval, 9);
        assert_eq!(result.ease, 2.65);
        assert_eq!(
            result.next_review_date.timestamp_millis(),
            1_640_995_200_000 + 9 * DAY_MS
        );
    }

    #[test]
    fn test_again_at_ease_floor() {
        let result = review(Difficulty::Again, 1, 1.3);
        assert_eq!(result.interval, 1);
        assert_eq!(result.ease, 1.3);
    }

    #[test]
    fn test_hard_at_minimum_interval_and_ease() {
        let result = review(Difficulty::Hard, 1, 1.3);
        assert_eq!(result.interval, 1);
        assert_eq!(result.ease, 1.3);
    }

    #[test]
    fn test_defaults_for_new_card() {
        let result = compute_next_review(Difficulty::Good, None, None, Some(fixed_now())).unwrap();
        assert_eq!(result.interval, 2);
        assert_eq!(result.ease, 2.5);
    }

    #[test]
    fn test_invariants_hold_over_grid() {
        let now = fixed_now();
        for interval in 1..=120u32 {
            for step in 0..=40 {
                let ease = 1.3 + step as f64 * 0.05;
                for difficulty in Difficulty::ALL {
                    let result = review(difficulty, interval, ease);

                    assert!(result.interval >= 1);
                    assert!(result.ease >= 1.3);
                    assert_eq!(
                        result.next_review_date,
                        now + Duration::days(result.interval as i64)
                    );
                }
            }
        }
    }

    #[test]
    fn test_again_always_yields_one_day() {
        for interval in [1, 2, 10, 365, 10_000] {
            assert_eq!(review(Difficulty::Again, interval, 2.5).interval, 1);
        }
    }

    #[test]
    fn test_ease_direction_per_difficulty() {
        for step in 0..=40 {
            let ease = 1.3 + step as f64 * 0.05;

            assert!(review(Difficulty::Easy, 4, ease).ease > ease);
            assert!(review(Difficulty::Again, 4, ease).ease <= ease);
            assert!(review(Difficulty::Hard, 4, ease).ease <= ease);
            assert_eq!(review(Difficulty::Good, 4, ease).ease, ease);
        }
    }

    #[test]
    fn test_intervals_are_monotonic_in_difficulty() {
        for interval in 1..=200u32 {
            for step in 0..=40 {
                let ease = 1.3 + step as f64 * 0.05;
                let intervals: Vec<u32> = Difficulty::ALL
                    .iter()
                    .map(|&d| review(d, interval, ease).interval)
                    .collect();

                assert!(
                    intervals.windows(2).all(|w| w[0] <= w[1]),
                    "interval={} ease={} produced {:?}",
                    interval,
                    ease,
                    intervals
                );
            }
        }
    }

    #[test]
    fn test_repeated_easy_has_no_ease_ceiling() {
        let mut ease = 2.5;
        for _ in 0..50 {
            ease = review(Difficulty::Easy, 1, ease).ease;
        }
        assert!(ease > 9.9);
    }

    #[test]
    fn test_zero_interval_is_clamped_on_read() {
        let good = review(Difficulty::Good, 0, 2.5);
        assert_eq!(good.interval, 2);

        let easy = review(Difficulty::Easy, 0, 2.5);
        assert_eq!(easy.interval, 3);
    }

    #[test]
    fn test_sub_floor_ease_is_clamped_on_read() {
        let result = review(Difficulty::Good, 10, 0.5);
        assert_eq!(result.ease, 1.3);
        assert_eq!(result.interval, 13);

        let result = review(Difficulty::Easy, 10, f64::NAN);
        assert_eq!(result.ease, 1.3 + 0.15);
    }

    #[test]
    fn test_infinite_ease_reads_as_floor() {
        let again = review(Difficulty::Again, 5, f64::INFINITY);
        assert_eq!(again.ease, 1.3);
        assert_eq!(again.interval, 1);

        let good = review(Difficulty::Good, 5, f64::INFINITY);
        assert_eq!(good.ease, 1.3);
        // floor(5 * 1.3)
        assert_eq!(good.interval, 6);

        let hard = review(Difficulty::Hard, 5, f64::NEG_INFINITY);
        assert_eq!(hard.ease, 1.3);
    }

    #[test]
    fn test_interval_far_in_future_is_an_error() {
        let result = compute_next_review(
            Difficulty::Easy,
            Some(u32::MAX / 2),
            Some(2.5),
            Some(fixed_now()),
        );
        assert!(matches!(result, Err(SchedulerError::DateOutOfRange { .. })));
    }

    #[test]
    fn test_now_defaults_to_current_time() {
        let before = Utc::now();
        let result = compute_next_review(Difficulty::Again, Some(3), Some(2.5), None).unwrap();
        let after = Utc::now();

        assert!(result.next_review_date >= before + Duration::days(1));
        assert!(result.next_review_date <= after + Duration::days(1));
    }

    #[test]
    fn test_custom_policy() {
        let policy = SchedulingPolicy {
            easy_interval_multiplier: 2.0,
            easy_ease_bonus: 0.3,
            ..Default::default()
        };
        let scheduler = ReviewScheduler::new(policy).unwrap();

        let result = scheduler
            .next_review(Difficulty::Easy, Some(2), Some(2.0), fixed_now())
            .unwrap();
        assert_eq!(result.interval, 8);
        assert_eq!(result.ease, 2.3);
    }

    #[test]
    fn test_invalid_policy_is_rejected() {
        let policy = SchedulingPolicy {
            minimum_ease: 0.0,
            ..Default::default()
        };
        assert!(ReviewScheduler::new(policy).is_err());
    }
}
