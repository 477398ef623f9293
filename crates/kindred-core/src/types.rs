use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tier::Tier;

/// Number of points in the standard 68-point facial landmark topology.
pub const LANDMARK_COUNT: usize = 68;
/// Left jaw extreme, one end of the face-width span.
pub const JAW_LEFT: usize = 0;
/// Right jaw extreme, the other end of the face-width span.
pub const JAW_RIGHT: usize = 16;
/// Nasal bridge, used as the origin for normalization.
pub const NASAL_BRIDGE: usize = 27;

/// A 2D landmark coordinate in detector pixel space.
///
/// Serialized as a two-element array `[x, y]`, which is how most landmark
/// detectors emit their output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f32, f32)", into = "(f32, f32)")]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f32, f32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::Div<f32> for Point {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

/// Raw landmark output for one detected face.
///
/// A well-formed set holds exactly [`LANDMARK_COUNT`] finite points, but the
/// type accepts whatever the detector produced; [`LandmarkSet::validate`]
/// enforces the invariant before any arithmetic happens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    points: Vec<Point>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Signed horizontal span between the two outer jaw landmarks.
    ///
    /// Returns `None` if the set is too short to contain both anchors.
    pub fn face_width(&self) -> Option<f32> {
        let left = self.points.get(JAW_LEFT)?;
        let right = self.points.get(JAW_RIGHT)?;
        Some(right.x - left.x)
    }
}

impl From<Vec<(f32, f32)>> for LandmarkSet {
    fn from(raw: Vec<(f32, f32)>) -> Self {
        Self::new(raw.into_iter().map(Point::from).collect())
    }
}

/// Which input of a comparison a detection or failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    First,
    Second,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => f.write_str("first"),
            Side::Second => f.write_str("second"),
        }
    }
}

/// Why a comparison was routed to the fallback generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    FirstMissing,
    SecondMissing,
    BothMissing,
}

impl FallbackReason {
    /// Classify a pair of detection outcomes. `None` when both faces are present.
    pub fn from_presence(first: bool, second: bool) -> Option<Self> {
        match (first, second) {
            (true, true) => None,
            (false, true) => Some(Self::FirstMissing),
            (true, false) => Some(Self::SecondMissing),
            (false, false) => Some(Self::BothMissing),
        }
    }
}

/// Final user-facing output of one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// Chemistry score in [0, 99].
    pub score: u8,
    pub tier: Tier,
}

impl CompatibilityResult {
    pub fn from_score(score: u8) -> Self {
        Self {
            score,
            tier: Tier::from_score(score),
        }
    }
}

/// How a [`CompatibilityResult`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "path", rename_all = "snake_case")]
pub enum Outcome {
    /// Both faces were present and compared point by point.
    Measured {
        avg_diff: f32,
        base_score: f32,
        bonus: f32,
    },
    /// At least one face was missing; the score is a plausible stand-in.
    Fallback { reason: FallbackReason },
}

/// A comparison result together with its breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub result: CompatibilityResult,
    pub outcome: Outcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(3.0, 4.0);
        let b = Point::new(1.0, 2.0);

        let diff = a - b;
        assert_eq!(diff, Point::new(2.0, 2.0));

        let halved = a / 2.0;
        assert_eq!(halved, Point::new(1.5, 2.0));

        assert!((Point::new(0.0, 0.0).distance(&a) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_point_serializes_as_pair() {
        let json = serde_json::to_string(&Point::new(1.5, -2.0)).unwrap();
        assert_eq!(json, "[1.5,-2.0]");

        let back: Point = serde_json::from_str("[3, 4]").unwrap();
        assert_eq!(back, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_landmark_set_is_transparent_array() {
        let set: LandmarkSet = serde_json::from_str("[[0, 0], [1, 2]]").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.points()[1], Point::new(1.0, 2.0));
    }

    #[test]
    fn test_face_width_signed() {
        let mut raw = vec![(0.0, 0.0); LANDMARK_COUNT];
        raw[JAW_LEFT] = (120.0, 0.0);
        raw[JAW_RIGHT] = (20.0, 0.0);
        let set = LandmarkSet::from(raw);
        assert_eq!(set.face_width(), Some(-100.0));
    }

    #[test]
    fn test_face_width_short_set() {
        let set = LandmarkSet::from(vec![(0.0, 0.0); 10]);
        assert_eq!(set.face_width(), None);
    }

    #[test]
    fn test_fallback_reason_from_presence() {
        assert_eq!(FallbackReason::from_presence(true, true), None);
        assert_eq!(
            FallbackReason::from_presence(false, true),
            Some(FallbackReason::FirstMissing)
        );
        assert_eq!(
            FallbackReason::from_presence(true, false),
            Some(FallbackReason::SecondMissing)
        );
        assert_eq!(
            FallbackReason::from_presence(false, false),
            Some(FallbackReason::BothMissing)
        );
    }

    #[test]
    fn test_result_json_shape() {
        let result = CompatibilityResult::from_score(84);
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json, serde_json::json!({ "score": 84, "tier": 2 }));
    }
}
