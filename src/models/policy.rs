//! Numeric constants of the scheduling policy.
//!
//! `SchedulingPolicy::default()` is the stock policy. A custom one can be
//! loaded from JSON; any field left out falls back to its default.

use crate::error::{Result, SchedulerError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulingPolicy {
    /// Interval assumed for a card that was never reviewed.
    pub initial_interval_days: u32,
    /// Ease assumed for a card that was never reviewed.
    pub initial_ease: f64,
    /// Hard floor for the ease factor.
    pub minimum_ease: f64,
    pub again_ease_penalty: f64,
    pub hard_ease_penalty: f64,
    pub hard_interval_multiplier: f64,
    pub easy_ease_bonus: f64,
    pub easy_interval_multiplier: f64,
}

impl Default for SchedulingPolicy {
    fn default() -> Self {
        Self {
            initial_interval_days: 1,
            initial_ease: 2.5,
            minimum_ease: 1.3,
            again_ease_penalty: 0.2,
            hard_ease_penalty: 0.15,
            hard_interval_multiplier: 1.2,
            easy_ease_bonus: 0.15,
            easy_interval_multiplier: 1.3,
        }
    }
}

impl SchedulingPolicy {
    /// Loads a policy from a JSON file and validates it.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let policy: SchedulingPolicy = serde_json::from_str(&contents)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Rejects values that would let the scheduler break its own invariants
    /// (interval below one day, ease below the floor, or difficulties no
    /// longer ordered by the interval they produce).
    pub fn validate(&self) -> Result<()> {
        let floats = [
            ("initial_ease", self.initial_ease),
            ("minimum_ease", self.minimum_ease),
            ("again_ease_penalty", self.again_ease_penalty),
            ("hard_ease_penalty", self.hard_ease_penalty),
            ("hard_interval_multiplier", self.hard_interval_multiplier),
            ("easy_ease_bonus", self.easy_ease_bonus),
            ("easy_interval_multiplier", self.easy_interval_multiplier),
        ];
        if let Some((name, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SchedulerError::Config(format!("{} must be finite", name)));
        }

        if self.initial_interval_days < 1 {
            return Err(SchedulerError::Config(
                "initial_interval_days must be at least 1".to_string(),
            ));
        }
        if self.minimum_ease < 1.0 {
            return Err(SchedulerError::Config(
                "minimum_ease must be at least 1.0".to_string(),
            ));
        }
        if self.initial_ease < self.minimum_ease {
            return Err(SchedulerError::Config(format!(
                "initial_ease {} is below minimum_ease {}",
                self.initial_ease, self.minimum_ease
            )));
        }
        if self.again_ease_penalty < 0.0 || self.hard_ease_penalty < 0.0 {
            return Err(SchedulerError::Config(
                "ease penalties must not be negative".to_string(),
            ));
        }
        if self.easy_ease_bonus <= 0.0 {
            return Err(SchedulerError::Config(
                "easy_ease_bonus must be positive".to_string(),
            ));
        }
        if self.hard_interval_multiplier < 1.0 || self.hard_interval_multiplier > self.minimum_ease
        {
            return Err(SchedulerError::Config(format!(
                "hard_interval_multiplier must be between 1.0 and minimum_ease ({})",
                self.minimum_ease
            )));
        }
        if self.easy_interval_multiplier < 1.0 {
            return Err(SchedulerError::Config(
                "easy_interval_multiplier must be at least 1.0".to_string(),
            ));
        }

        Ok(())
    }
}
