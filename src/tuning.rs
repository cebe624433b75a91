//! Data-driven difficulty numbers
//!
//! The defaults reproduce the classic balance; a driver can deserialize
//! its own table to reskin the difficulty curve without touching the
//! simulation. Board geometry is not tunable, only pacing.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Difficulty knobs carried inside the game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Lives at the start of a run
    pub start_lives: i32,
    /// Invader fire modulus at the start of a run
    pub start_shot_interval: u64,
    /// How much the fire modulus shrinks per cleared wave
    pub shot_interval_step: u64,
    /// Floor for the fire modulus
    pub min_shot_interval: u64,
    /// Sideways drift happens on ticks divisible by this
    pub drift_period: u64,
    /// Added to the fire modulus to form the descent modulus
    pub descent_lag: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            start_lives: START_LIVES,
            start_shot_interval: START_SHOT_INTERVAL,
            shot_interval_step: SHOT_INTERVAL_STEP,
            min_shot_interval: MIN_SHOT_INTERVAL,
            drift_period: DRIFT_PERIOD,
            descent_lag: DESCENT_LAG,
        }
    }
}

impl Tuning {
    /// Parse a tuning table from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Fire modulus after a wave clear, clamped to the floor
    pub fn next_shot_interval(&self, current: u64) -> u64 {
        current
            .saturating_sub(self.shot_interval_step)
            .max(self.min_shot_interval.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let t = Tuning::default();
        assert_eq!(t.start_lives, 3);
        assert_eq!(t.start_shot_interval, 20);
        assert_eq!(t.drift_period, 10);
    }

    #[test]
    fn test_from_json_partial_override() {
        let t = Tuning::from_json(r#"{"start_lives": 5}"#).unwrap();
        assert_eq!(t.start_lives, 5);
        assert_eq!(t.start_shot_interval, 20);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Tuning::from_json("not json").is_err());
    }

    #[test]
    fn test_shot_interval_never_hits_zero() {
        let t = Tuning::default();
        assert_eq!(t.next_shot_interval(20), 15);
        assert_eq!(t.next_shot_interval(7), 5);
        assert_eq!(t.next_shot_interval(5), 5);

        // Even a degenerate table keeps the modulus positive
        let t = Tuning {
            min_shot_interval: 0,
            ..Tuning::default()
        };
        assert_eq!(t.next_shot_interval(3), 1);
    }
}
