//! Snap configuration
//!
//! Values owned by the application and persisted as RON alongside its
//! other settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::guide::MIN_ANGLE_STEP;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Reading or writing the file failed
    #[error("IO error: {0}")]
    Io(String),
    /// The configuration could not be written as RON
    #[error("Serialization error: {0}")]
    Serialize(String),
    /// The file is not a valid configuration
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    /// A value is out of range
    #[error("Invalid snap configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Snap and hover settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Angle between consecutive guide lines (degrees)
    pub angle_step: f64,
    /// Maximum cursor distance for any snap (world units)
    pub snap_radius: f64,
    /// Interval of the host's hover timer (ms), read through
    /// `SnapSession::tick_interval_ms`
    pub hover_tick_ms: u64,
    /// Dwell time after which a hovered point gets marked (ms)
    pub promote_after_ms: u64,
    /// Distance under which two hovered points count as the same
    pub hover_proximity: f64,
    /// Capacity of the marked point list
    pub max_marked: usize,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            angle_step: 15.0,
            snap_radius: 10.0,
            hover_tick_ms: 100,
            promote_after_ms: 500,
            hover_proximity: 1.0,
            max_marked: 5,
        }
    }
}

impl SnapConfig {
    /// Set the guide angle step
    pub fn with_angle_step(mut self, degrees: f64) -> Self {
        self.angle_step = degrees;
        self
    }

    /// Set the snap radius
    pub fn with_snap_radius(mut self, radius: f64) -> Self {
        self.snap_radius = radius;
        self
    }

    /// Set the promotion threshold
    pub fn with_promote_after_ms(mut self, ms: u64) -> Self {
        self.promote_after_ms = ms;
        self
    }

    /// Set the hover proximity threshold
    pub fn with_hover_proximity(mut self, distance: f64) -> Self {
        self.hover_proximity = distance;
        self
    }

    /// Set the marked list capacity
    pub fn with_max_marked(mut self, count: usize) -> Self {
        self.max_marked = count;
        self
    }

    /// Check that every value is usable
    pub fn validate(&self) -> ConfigResult<()> {
        if !(MIN_ANGLE_STEP..=180.0).contains(&self.angle_step) {
            return Err(ConfigError::Invalid(format!(
                "angle step must be in [{MIN_ANGLE_STEP}, 180], got {}",
                self.angle_step
            )));
        }
        if !self.snap_radius.is_finite() || self.snap_radius < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "snap radius must be non-negative, got {}",
                self.snap_radius
            )));
        }
        if self.hover_tick_ms == 0 {
            return Err(ConfigError::Invalid("hover tick must be positive".into()));
        }
        if !self.hover_proximity.is_finite() || self.hover_proximity < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "hover proximity must be non-negative, got {}",
                self.hover_proximity
            )));
        }
        Ok(())
    }

    /// Parse and validate a RON string
    pub fn from_ron_str(content: &str) -> ConfigResult<Self> {
        let config: SnapConfig =
            ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty RON
    pub fn to_ron_string(&self) -> ConfigResult<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_ron_str(&content)
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let content = self.to_ron_string()?;
        std::fs::write(path.as_ref(), content).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SnapConfig::default();
        assert_eq!(config.angle_step, 15.0);
        assert_eq!(config.max_marked, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(matches!(
            SnapConfig::default().with_angle_step(0.0).validate(),
            Err(ConfigError::Invalid(_))
        ));
        assert!(SnapConfig::default().with_angle_step(f64::NAN).validate().is_err());
        assert!(SnapConfig::default().with_angle_step(1e-7).validate().is_err());
        assert!(SnapConfig::default().with_angle_step(0.1).validate().is_ok());
        assert!(SnapConfig::default().with_angle_step(180.0).validate().is_ok());
        assert!(SnapConfig::default().with_snap_radius(-1.0).validate().is_err());
        assert!(SnapConfig::default().with_hover_proximity(f64::INFINITY).validate().is_err());
        assert!(SnapConfig::default().with_max_marked(0).validate().is_ok());
    }

    #[test]
    fn test_ron_string_round_trip() {
        let config = SnapConfig::default().with_angle_step(30.0).with_snap_radius(4.5);
        let text = config.to_ron_string().unwrap();
        assert_eq!(SnapConfig::from_ron_str(&text).unwrap(), config);
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let config = SnapConfig::from_ron_str("(angle_step: 45.0)").unwrap();
        assert_eq!(config.angle_step, 45.0);
        assert_eq!(config.snap_radius, 10.0);
    }

    #[test]
    fn test_invalid_ron() {
        assert!(matches!(
            SnapConfig::from_ron_str("(angle_step: \"wide\")"),
            Err(ConfigError::Deserialize(_))
        ));
        assert!(matches!(
            SnapConfig::from_ron_str("(angle_step: -15.0)"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snap.ron");

        let config = SnapConfig::default().with_promote_after_ms(800).with_max_marked(3);
        config.save(&path).unwrap();
        assert_eq!(SnapConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SnapConfig::load(dir.path().join("missing.ron"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
