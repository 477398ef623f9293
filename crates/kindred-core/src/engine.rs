//! Comparison pipeline: normalize → aggregate → score → tier, with the
//! fallback path for missing faces.

use rand::Rng;

use crate::config::ScoringConfig;
use crate::detector::{resolve_detection, LandmarkDetector};
use crate::distance::average_distance;
use crate::error::CompatibilityError;
use crate::fallback::fallback_score;
use crate::normalize::{normalize, NormalizedLandmarkSet};
use crate::score::{base_score, draw_bonus, final_score};
use crate::types::{
    CompatibilityResult, ComparisonReport, FallbackReason, LandmarkSet, Outcome, Side,
};

/// Compare two optional landmark sets using a per-call thread-local RNG.
pub fn compare_faces(
    a: Option<&LandmarkSet>,
    b: Option<&LandmarkSet>,
    config: &ScoringConfig,
) -> Result<CompatibilityResult, CompatibilityError> {
    compare_faces_with_rng(a, b, config, &mut rand::thread_rng())
}

/// Compare two optional landmark sets with an injected RNG.
pub fn compare_faces_with_rng<R: Rng + ?Sized>(
    a: Option<&LandmarkSet>,
    b: Option<&LandmarkSet>,
    config: &ScoringConfig,
    rng: &mut R,
) -> Result<CompatibilityResult, CompatibilityError> {
    compare_faces_detailed(a, b, config, rng).map(|report| report.result)
}

/// Full comparison, returning the score breakdown alongside the result.
///
/// The config and every non-null input are validated before anything else, so
/// a malformed set fails even when the other face is missing.
pub fn compare_faces_detailed<R: Rng + ?Sized>(
    a: Option<&LandmarkSet>,
    b: Option<&LandmarkSet>,
    config: &ScoringConfig,
    rng: &mut R,
) -> Result<ComparisonReport, CompatibilityError> {
    config.validate().map_err(|err| {
        tracing::error!(error = %err, "rejecting scoring configuration");
        err
    })?;
    let na = a.map(|set| normalize_side(set, Side::First)).transpose()?;
    let nb = b.map(|set| normalize_side(set, Side::Second)).transpose()?;

    let (na, nb) = match (na, nb) {
        (Some(na), Some(nb)) => (na, nb),
        (na, nb) => {
            let reason = FallbackReason::from_presence(na.is_some(), nb.is_some())
                .unwrap_or(FallbackReason::BothMissing);
            let score = fallback_score(reason, &config.fallback, rng);
            return Ok(ComparisonReport {
                result: CompatibilityResult::from_score(score),
                outcome: Outcome::Fallback { reason },
            });
        }
    };

    let avg_diff = average_distance(&na, &nb).map_err(|err| {
        tracing::error!(error = %err, "landmark aggregation failed");
        err
    })?;
    let base = base_score(avg_diff, config.sensitivity);
    let bonus = draw_bonus(rng, config.bonus_min, config.bonus_max);
    let result = CompatibilityResult::from_score(final_score(base, bonus));

    tracing::debug!(
        avg_diff,
        base_score = base,
        bonus,
        score = result.score,
        tier = result.tier.number(),
        "faces compared"
    );

    Ok(ComparisonReport {
        result,
        outcome: Outcome::Measured {
            avg_diff,
            base_score: base,
            bonus,
        },
    })
}

/// Detect landmarks in both images, then compare them.
///
/// Detector failures fall back like any other miss; only malformed landmark
/// output propagates.
pub fn compare_images<D, R>(
    detector: &D,
    first: &D::Image,
    second: &D::Image,
    config: &ScoringConfig,
    rng: &mut R,
) -> Result<ComparisonReport, CompatibilityError>
where
    D: LandmarkDetector,
    R: Rng + ?Sized,
{
    let a = resolve_detection(detector.detect_landmarks(first), Side::First);
    let b = resolve_detection(detector.detect_landmarks(second), Side::Second);
    compare_faces_detailed(a.as_ref(), b.as_ref(), config, rng)
}

fn normalize_side(
    set: &LandmarkSet,
    side: Side,
) -> Result<NormalizedLandmarkSet, CompatibilityError> {
    normalize(set).map_err(|err| {
        tracing::error!(%side, points = set.len(), error = %err, "rejecting landmark set");
        err
    })
}
