use anyhow::{Context, Result};
use kindred_core::ScoringConfig;
use std::path::Path;

/// CLI configuration: scoring parameters plus an optional fixed RNG seed.
pub struct Config {
    pub scoring: ScoringConfig,
    /// Seed for reproducible jitter and fallback draws.
    pub seed: Option<u64>,
}

impl Config {
    /// Load defaults, then the TOML file named by `KINDRED_CONFIG`, then
    /// `KINDRED_*` overrides. The result is validated before returning.
    pub fn load() -> Result<Self> {
        let mut scoring = match std::env::var("KINDRED_CONFIG") {
            Ok(path) => from_file(Path::new(&path))?,
            Err(_) => ScoringConfig::default(),
        };

        scoring.sensitivity = env_f32("KINDRED_SENSITIVITY", scoring.sensitivity);
        scoring.bonus_min = env_f32("KINDRED_BONUS_MIN", scoring.bonus_min);
        scoring.bonus_max = env_f32("KINDRED_BONUS_MAX", scoring.bonus_max);

        scoring.validate().context("invalid scoring configuration")?;

        Ok(Self {
            scoring,
            seed: env_u64("KINDRED_SEED"),
        })
    }
}

fn from_file(path: &Path) -> Result<ScoringConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_toml(&raw).with_context(|| format!("failed to parse config {}", path.display()))
}

fn parse_toml(raw: &str) -> Result<ScoringConfig, toml::de::Error> {
    toml::from_str(raw)
}

fn env_f32(key: &str, default: f32) -> f32 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_u64(key: &str) -> Option<u64> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindred_core::Band;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = parse_toml("sensitivity = 900.0\n").unwrap();
        assert_eq!(config.sensitivity, 900.0);
        assert_eq!(config.bonus_min, ScoringConfig::default().bonus_min);
        assert_eq!(config.fallback, ScoringConfig::default().fallback);
    }

    #[test]
    fn test_toml_fallback_bands() {
        let raw = r#"
bonus_min = 10.0
bonus_max = 20.0

[fallback.both_missing]
lo = 70
hi = 80
"#;
        let config = parse_toml(raw).unwrap();
        assert_eq!(config.bonus_max, 20.0);
        assert_eq!(config.fallback.both_missing, Band::new(70, 80));
        assert_eq!(
            config.fallback.one_missing,
            ScoringConfig::default().fallback.one_missing
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_roundtrips_through_toml() {
        let text = toml::to_string_pretty(&ScoringConfig::default()).unwrap();
        assert_eq!(parse_toml(&text).unwrap(), ScoringConfig::default());
    }
}
