//! Point-by-point shape dissimilarity between two normalized faces.

use crate::error::CompatibilityError;
use crate::normalize::NormalizedLandmarkSet;
use crate::types::LANDMARK_COUNT;

/// Mean per-index Euclidean distance between two normalized landmark sets.
///
/// Symmetric in its arguments. Never truncates to the shorter input and never
/// returns NaN: short or non-finite input is a [`CompatibilityError::MalformedLandmarks`].
pub fn average_distance(
    a: &NormalizedLandmarkSet,
    b: &NormalizedLandmarkSet,
) -> Result<f32, CompatibilityError> {
    if a.len() < LANDMARK_COUNT || b.len() < LANDMARK_COUNT {
        return Err(CompatibilityError::MalformedLandmarks(format!(
            "cannot compare sets of {} and {} points, need {LANDMARK_COUNT}",
            a.len(),
            b.len()
        )));
    }

    let mut total = 0.0f32;
    for (i, (pa, pb)) in a
        .points()
        .iter()
        .zip(b.points())
        .take(LANDMARK_COUNT)
        .enumerate()
    {
        let d = pa.distance(pb);
        if !d.is_finite() {
            return Err(CompatibilityError::MalformedLandmarks(format!(
                "landmark pair {i} is not finite"
            )));
        }
        total += d;
    }

    Ok(total / LANDMARK_COUNT as f32)
}
