//! File-backed landmark detector.
//!
//! Reads detector output that was saved as JSON. Accepted shapes:
//! a bare array of `[x, y]` pairs, `null` (no face), or an object
//! `{"landmarks": <array or null>}`.

use kindred_core::{LandmarkDetector, LandmarkSet};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LandmarkFileError {
    #[error("landmark file not found: {0}")]
    NotFound(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid landmark JSON in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LandmarkFile {
    Bare(Option<LandmarkSet>),
    Wrapped(Wrapped),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Wrapped {
    /// Required even when null, so `{}` is rejected instead of read as "no face".
    #[serde(deserialize_with = "required_landmarks")]
    landmarks: Option<LandmarkSet>,
}

fn required_landmarks<'de, D>(deserializer: D) -> Result<Option<LandmarkSet>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<LandmarkSet>::deserialize(deserializer)
}

impl LandmarkFile {
    fn into_landmarks(self) -> Option<LandmarkSet> {
        match self {
            LandmarkFile::Bare(set) => set,
            LandmarkFile::Wrapped(Wrapped { landmarks }) => landmarks,
        }
    }
}

/// Parse the contents of a landmark file.
pub fn parse_landmarks(json: &str) -> Result<Option<LandmarkSet>, serde_json::Error> {
    serde_json::from_str::<LandmarkFile>(json).map(LandmarkFile::into_landmarks)
}

/// Detector that treats each "image" as a path to precomputed landmark JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFileDetector;

impl LandmarkDetector for JsonFileDetector {
    type Image = Path;
    type Error = LandmarkFileError;

    fn detect_landmarks(&self, path: &Path) -> Result<Option<LandmarkSet>, LandmarkFileError> {
        let display = path.display().to_string();
        if !path.exists() {
            return Err(LandmarkFileError::NotFound(display));
        }

        let json = std::fs::read_to_string(path).map_err(|source| LandmarkFileError::Io {
            path: display.clone(),
            source,
        })?;

        let landmarks =
            parse_landmarks(&json).map_err(|source| LandmarkFileError::Parse { path: display, source })?;

        tracing::debug!(
            path = %path.display(),
            points = landmarks.as_ref().map(LandmarkSet::len),
            "loaded landmark file"
        );
        Ok(landmarks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindred_core::Point;

    #[test]
    fn test_parse_bare_array() {
        let set = parse_landmarks("[[1, 2], [3.5, 4]]").unwrap().unwrap();
        assert_eq!(set.points(), &[Point::new(1.0, 2.0), Point::new(3.5, 4.0)]);
    }

    #[test]
    fn test_parse_null_is_no_face() {
        assert!(parse_landmarks("null").unwrap().is_none());
        assert!(parse_landmarks(r#"{"landmarks": null}"#).unwrap().is_none());
    }

    #[test]
    fn test_parse_wrapped() {
        let set = parse_landmarks(r#"{"landmarks": [[0, 0], [10, 5], [2, 2]]}"#)
            .unwrap()
            .unwrap();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_parse_garbage_fails() {
        assert!(parse_landmarks(r#"{"faces": 2}"#).is_err());
        assert!(parse_landmarks("[1, 2, 3]").is_err());
        assert!(parse_landmarks("[[1, 2], [3]]").is_err());
    }

    #[test]
    fn test_parse_empty_object_fails() {
        assert!(parse_landmarks("{}").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = JsonFileDetector
            .detect_landmarks(Path::new("/definitely/not/here.json"))
            .unwrap_err();
        assert!(matches!(err, LandmarkFileError::NotFound(_)));
    }

    #[test]
    fn test_reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("kindred-landmarks-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"landmarks": [[1, 1], [2, 2]]}"#).unwrap();
        let set = JsonFileDetector.detect_landmarks(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(set.map(|s| s.len()), Some(2));
    }
}
