use thiserror::Error;

/// Failures that surface to the caller of a comparison.
///
/// A missing face is not an error: it is absorbed by the fallback path.
/// The landmark variants mean a non-null landmark set broke the detector
/// contract; `InvalidConfig` means the caller passed unusable scoring parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompatibilityError {
    #[error("malformed landmarks: {0}")]
    MalformedLandmarks(String),
    #[error("degenerate geometry: face width {0} is zero or non-finite")]
    DegenerateGeometry(f32),
    #[error("invalid scoring configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl CompatibilityError {
    /// True for cardinality/finiteness violations, false for degenerate geometry.
    pub fn is_malformed(&self) -> bool {
        matches!(self, CompatibilityError::MalformedLandmarks(_))
    }
}

/// Invalid scoring configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("sensitivity must be finite and positive, got {0}")]
    InvalidSensitivity(f32),
    #[error("bonus range [{min}, {max}] must be finite, non-negative and ordered")]
    InvalidBonusRange { min: f32, max: f32 },
    #[error("fallback band {name} [{lo}, {hi}] must satisfy lo <= hi <= 99")]
    InvalidFallbackBand { name: &'static str, lo: u8, hi: u8 },
}
