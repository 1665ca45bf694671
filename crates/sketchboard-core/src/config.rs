//! Board configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! overrides.

use crate::input::PointerButton;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default distance within which a click picks a stroke.
pub const DEFAULT_STROKE_HIT_THRESHOLD: f64 = 8.0;
/// Default side length of the rectangle resize handle.
pub const DEFAULT_HANDLE_SIZE: f64 = 10.0;
/// Default half side of the eraser square.
pub const DEFAULT_ERASER_HALF_SIZE: f64 = 15.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables for hit testing, the eraser and history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Distance within which a point counts as "near" a stroke.
    pub stroke_hit_threshold: f64,
    /// Side of the square resize handle at a rectangle's far corner.
    pub handle_size: f64,
    /// Half side of the eraser square.
    pub eraser_half_size: f64,
    /// Allow resizing circles by dragging their boundary.
    pub circle_boundary_resize: bool,
    /// Button that erases for the duration of one gesture.
    pub erase_button: PointerButton,
    /// Maximum undo depth (None = unbounded).
    pub history_limit: Option<usize>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            stroke_hit_threshold: DEFAULT_STROKE_HIT_THRESHOLD,
            handle_size: DEFAULT_HANDLE_SIZE,
            eraser_half_size: DEFAULT_ERASER_HALF_SIZE,
            circle_boundary_resize: false,
            erase_button: PointerButton::Secondary,
            history_limit: None,
        }
    }
}

impl BoardConfig {
    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded board config from {}", path.display());
        Ok(config)
    }

    /// Serialize the config to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert!((config.stroke_hit_threshold - 8.0).abs() < f64::EPSILON);
        assert!((config.handle_size - 10.0).abs() < f64::EPSILON);
        assert!((config.eraser_half_size - 15.0).abs() < f64::EPSILON);
        assert_eq!(config.erase_button, PointerButton::Secondary);
        assert!(config.history_limit.is_none());
    }

    #[test]
    fn test_partial_json() {
        let config =
            BoardConfig::from_json(r#"{ "handle_size": 16.0, "history_limit": 20 }"#).unwrap();
        assert!((config.handle_size - 16.0).abs() < f64::EPSILON);
        assert_eq!(config.history_limit, Some(20));
        assert!((config.eraser_half_size - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_json() {
        let err = BoardConfig::from_json("{ handle_size: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "erase_button": "Middle", "circle_boundary_resize": true }}"#).unwrap();

        let config = BoardConfig::load(file.path()).unwrap();
        assert_eq!(config.erase_button, PointerButton::Middle);
        assert!(config.circle_boundary_resize);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = BoardConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = BoardConfig {
            history_limit: Some(5),
            ..BoardConfig::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(BoardConfig::from_json(&json).unwrap(), config);
    }
}
