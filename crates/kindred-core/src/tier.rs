//! Score → narrative tier classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bounds of tiers 1..=4, in descending order. Anything below the last
/// threshold is tier 5.
const TIER_THRESHOLDS: [(u8, Tier); 4] = [
    (90, Tier::Soulmates),
    (80, Tier::Kindred),
    (70, Tier::Promising),
    (60, Tier::Curious),
];

/// Discrete narrative bucket used to select display copy.
///
/// Serialized as its number (1 = best, 5 = lowest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Tier {
    Soulmates = 1,
    Kindred = 2,
    Promising = 3,
    Curious = 4,
    Opposites = 5,
}

impl Tier {
    /// Classify a final score. Total over `u8`; lower bounds are inclusive.
    pub fn from_score(score: u8) -> Self {
        TIER_THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, tier)| *tier)
            .unwrap_or(Tier::Opposites)
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Stable key for downstream copy selection.
    pub fn label(self) -> &'static str {
        match self {
            Tier::Soulmates => "soulmates",
            Tier::Kindred => "kindred",
            Tier::Promising => "promising",
            Tier::Curious => "curious",
            Tier::Opposites => "opposites",
        }
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> Self {
        tier.number()
    }
}

impl TryFrom<u8> for Tier {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Tier::Soulmates),
            2 => Ok(Tier::Kindred),
            3 => Ok(Tier::Promising),
            4 => Ok(Tier::Curious),
            5 => Ok(Tier::Opposites),
            other => Err(format!("tier must be 1..=5, got {other}")),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        let cases = [
            (99, 1),
            (90, 1),
            (89, 2),
            (80, 2),
            (79, 3),
            (70, 3),
            (69, 4),
            (60, 4),
            (59, 5),
            (0, 5),
        ];
        for (score, expected) in cases {
            assert_eq!(
                Tier::from_score(score).number(),
                expected,
                "score {score} should be tier {expected}"
            );
        }
    }

    #[test]
    fn test_tier_total_over_score_range() {
        for score in 0..=99u8 {
            let n = Tier::from_score(score).number();
            assert!((1..=5).contains(&n), "score {score} → tier {n}");
        }
        // Scores above the product range still classify.
        assert_eq!(Tier::from_score(255), Tier::Soulmates);
    }

    #[test]
    fn test_tier_monotonic() {
        let mut prev = Tier::from_score(0);
        for score in 1..=99u8 {
            let tier = Tier::from_score(score);
            assert!(tier <= prev, "tier got worse at score {score}");
            prev = tier;
        }
    }

    #[test]
    fn test_tier_u8_roundtrip_rejects_out_of_range() {
        assert_eq!(Tier::try_from(3), Ok(Tier::Promising));
        assert!(Tier::try_from(0).is_err());
        assert!(Tier::try_from(6).is_err());
    }
}
