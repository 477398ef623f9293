//! Landmark normalization: translation and scale removal.
//!
//! Every point is re-expressed relative to the nasal bridge and divided by the
//! inter-jaw width, so faces of different size or position in their source
//! images become directly comparable.

use crate::error::CompatibilityError;
use crate::types::{LandmarkSet, Point, LANDMARK_COUNT, NASAL_BRIDGE};

/// A landmark set in nasal-bridge-anchored, face-width-scaled coordinates.
///
/// Only constructible through [`normalize`], so it always holds
/// [`LANDMARK_COUNT`] finite points.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedLandmarkSet {
    points: Vec<Point>,
}

impl NormalizedLandmarkSet {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_points_unchecked(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl LandmarkSet {
    /// Check the fixed-cardinality and finiteness invariants.
    pub fn validate(&self) -> Result<(), CompatibilityError> {
        if self.len() != LANDMARK_COUNT {
            return Err(CompatibilityError::MalformedLandmarks(format!(
                "expected {LANDMARK_COUNT} points, got {}",
                self.len()
            )));
        }
        if let Some(index) = self.points().iter().position(|p| !p.is_finite()) {
            return Err(CompatibilityError::MalformedLandmarks(format!(
                "point {index} is not finite"
            )));
        }
        Ok(())
    }
}

/// Normalize a landmark set: `N[i] = (L[i] - L[27]) / (L[16].x - L[0].x)`.
///
/// The width is signed; a mirrored set normalizes consistently with itself.
pub fn normalize(landmarks: &LandmarkSet) -> Result<NormalizedLandmarkSet, CompatibilityError> {
    landmarks.validate()?;

    // Validated length guarantees both jaw anchors exist.
    let width = landmarks.face_width().unwrap_or(0.0);
    if !width.is_finite() || width.abs() < f32::EPSILON {
        return Err(CompatibilityError::DegenerateGeometry(width));
    }

    let anchor = landmarks.points()[NASAL_BRIDGE];
    let points = landmarks
        .points()
        .iter()
        .map(|&p| (p - anchor) / width)
        .collect();

    Ok(NormalizedLandmarkSet { points })
}
