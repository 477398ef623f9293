//! Landmark detector capability.
//!
//! The engine never runs a detection model itself. Any backend that can turn
//! an image into an optional 68-point landmark set plugs in here, which keeps
//! the engine testable with synthetic landmark sets.

use std::fmt;

use crate::types::{LandmarkSet, Side};

/// Strategy for extracting facial landmarks from an image.
pub trait LandmarkDetector {
    type Image: ?Sized;
    type Error: fmt::Display;

    /// Return the landmarks of the most prominent face, or `None` if no face
    /// was confidently detected.
    fn detect_landmarks(&self, image: &Self::Image) -> Result<Option<LandmarkSet>, Self::Error>;
}

/// Collapse a detection result to "face or no face".
///
/// Detector errors are routine misses from the engine's point of view and are
/// logged, not propagated. The returned set is not validated here.
pub fn resolve_detection<E: fmt::Display>(
    result: Result<Option<LandmarkSet>, E>,
    side: Side,
) -> Option<LandmarkSet> {
    match result {
        Ok(Some(set)) => {
            tracing::debug!(%side, points = set.len(), "landmarks detected");
            Some(set)
        }
        Ok(None) => {
            tracing::debug!(%side, "no face detected");
            None
        }
        Err(err) => {
            tracing::warn!(%side, error = %err, "landmark detection failed; treating as no face");
            None
        }
    }
}
