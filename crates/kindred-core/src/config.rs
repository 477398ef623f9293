//! Scoring parameters: sensitivity, jitter range and fallback bands.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Maps normalized shape difference onto the 0–100 base score range.
pub const DEFAULT_SENSITIVITY: f32 = 1050.0;
pub const DEFAULT_BONUS_MIN: f32 = 12.0;
pub const DEFAULT_BONUS_MAX: f32 = 27.0;
/// Highest score the engine ever reports.
pub const MAX_SCORE: u8 = 99;

/// Inclusive integer score band used when detection failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    pub lo: u8,
    pub hi: u8,
}

impl Band {
    pub const fn new(lo: u8, hi: u8) -> Self {
        Self { lo, hi }
    }

    fn check(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.lo > self.hi || self.hi > MAX_SCORE {
            return Err(ConfigError::InvalidFallbackBand {
                name,
                lo: self.lo,
                hi: self.hi,
            });
        }
        Ok(())
    }
}

/// Fallback bands keyed by failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackBands {
    /// Exactly one of the two faces was not detected.
    pub one_missing: Band,
    /// Neither face was detected.
    pub both_missing: Band,
}

impl Default for FallbackBands {
    fn default() -> Self {
        Self {
            one_missing: Band::new(65, 89),
            both_missing: Band::new(68, 86),
        }
    }
}

/// Tunable parameters of the chemistry score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub sensitivity: f32,
    pub bonus_min: f32,
    pub bonus_max: f32,
    pub fallback: FallbackBands,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            bonus_min: DEFAULT_BONUS_MIN,
            bonus_max: DEFAULT_BONUS_MAX,
            fallback: FallbackBands::default(),
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.sensitivity.is_finite() || self.sensitivity <= 0.0 {
            return Err(ConfigError::InvalidSensitivity(self.sensitivity));
        }
        let bonus_ok = self.bonus_min.is_finite()
            && self.bonus_max.is_finite()
            && self.bonus_min >= 0.0
            && self.bonus_min <= self.bonus_max;
        if !bonus_ok {
            return Err(ConfigError::InvalidBonusRange {
                min: self.bonus_min,
                max: self.bonus_max,
            });
        }
        self.fallback.one_missing.check("one_missing")?;
        self.fallback.both_missing.check("both_missing")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_sensitivity() {
        for sensitivity in [0.0, -5.0, f32::NAN, f32::INFINITY] {
            let config = ScoringConfig {
                sensitivity,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidSensitivity(_))
            ));
        }
    }

    #[test]
    fn test_rejects_inverted_bonus() {
        let config = ScoringConfig {
            bonus_min: 30.0,
            bonus_max: 10.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidBonusRange {
                min: 30.0,
                max: 10.0
            })
        );
    }

    #[test]
    fn test_rejects_band_above_max_score() {
        let config = ScoringConfig {
            fallback: FallbackBands {
                both_missing: Band::new(80, 100),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidFallbackBand {
                name: "both_missing",
                ..
            })
        ));
    }
}
