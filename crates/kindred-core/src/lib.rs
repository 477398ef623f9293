//! kindred-core — Facial-landmark compatibility engine.
//!
//! Compares two 68-point landmark sets in a translation- and scale-invariant
//! space and turns their shape difference into a 0–99 chemistry score and a
//! narrative tier. Missing detections degrade to a plausible fallback score.

pub mod config;
pub mod detector;
pub mod distance;
pub mod engine;
pub mod error;
pub mod fallback;
pub mod normalize;
pub mod score;
pub mod tier;
pub mod types;

pub use config::{Band, FallbackBands, ScoringConfig};
pub use detector::{resolve_detection, LandmarkDetector};
pub use engine::{compare_faces, compare_faces_detailed, compare_faces_with_rng, compare_images};
pub use error::{CompatibilityError, ConfigError};
pub use normalize::{normalize, NormalizedLandmarkSet};
pub use tier::Tier;
pub use types::{
    CompatibilityResult, ComparisonReport, FallbackReason, LandmarkSet, Outcome, Point, Side,
    LANDMARK_COUNT,
};
