//! Shared brush settings for vertex painting
//!
//! This crate is the single source of truth for brush defaults and the
//! serialized form of brush settings exchanged with the host tool layer.
//! The paint core turns these settings into a per-call brush stroke.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default brush radius in mesh-local units
pub const DEFAULT_BRUSH_SIZE: f32 = 1.0;

/// Smallest brush radius accepted after sanitizing
pub const MIN_BRUSH_SIZE: f32 = 0.001;

/// Default falloff fraction (0 = hard edge, 1 = ramp over the whole radius)
pub const DEFAULT_FALLOFF: f32 = 0.5;

/// Default brush strength
pub const DEFAULT_STRENGTH: f32 = 0.5;

/// Default slope mask angle in degrees from world up
pub const DEFAULT_SLOPE_ANGLE_DEGREES: f32 = 45.0;

/// Default curvature mask sensitivity
pub const DEFAULT_CURVATURE_SENSITIVITY: f32 = 0.5;

/// Upper bound for curvature sensitivity; keeps the flatness threshold in [0, 1]
pub const MAX_CURVATURE_SENSITIVITY: f32 = 5.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse brush settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Paint mode as selected in the tool UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrushMode {
    #[default]
    Add,
    Sub,
    Set,
    Blur,
    Sharpen,
}

/// Slope mask settings (angle relative to world up)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlopeMaskSettings {
    pub enabled: bool,
    /// Maximum angle from world up, in degrees
    pub angle_degrees: f32,
    /// Paint only surfaces steeper than the angle instead
    pub invert: bool,
}

impl Default for SlopeMaskSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            angle_degrees: DEFAULT_SLOPE_ANGLE_DEGREES,
            invert: false,
        }
    }
}

impl SlopeMaskSettings {
    /// Cosine of the mask angle, compared against `dot(world_normal, up)`
    pub fn angle_cos(&self) -> f32 {
        self.angle_degrees.to_radians().cos()
    }
}

/// Curvature mask settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurvatureMaskSettings {
    pub enabled: bool,
    pub sensitivity: f32,
    /// Paint only flat areas instead of creases and ridges
    pub invert: bool,
}

impl Default for CurvatureMaskSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            sensitivity: DEFAULT_CURVATURE_SENSITIVITY,
            invert: false,
        }
    }
}

/// Brush settings as edited by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushSettings {
    /// Brush radius in mesh-local units
    pub size: f32,
    /// Fraction of the radius over which the brush fades out
    pub falloff: f32,
    /// Amount for add/sub/blur/sharpen, target value for set
    pub strength: f32,
    pub mode: BrushMode,
    /// Enabled channels in RGBA order
    pub channels: [bool; 4],
    /// Brush texture rotation in degrees
    pub angle_degrees: f32,
    pub slope: SlopeMaskSettings,
    pub curvature: CurvatureMaskSettings,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_BRUSH_SIZE,
            falloff: DEFAULT_FALLOFF,
            strength: DEFAULT_STRENGTH,
            mode: BrushMode::default(),
            channels: [true; 4],
            angle_degrees: 0.0,
            slope: SlopeMaskSettings::default(),
            curvature: CurvatureMaskSettings::default(),
        }
    }
}

impl BrushSettings {
    /// Parse settings from JSON, filling missing fields with defaults.
    /// The result is sanitized.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Serialize settings to a JSON string
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Clamp every field into its usable range
    pub fn sanitized(mut self) -> Self {
        self.size = if self.size.is_finite() {
            self.size.max(MIN_BRUSH_SIZE)
        } else {
            DEFAULT_BRUSH_SIZE
        };
        self.falloff = self.falloff.clamp(0.0, 1.0);
        self.strength = self.strength.clamp(0.0, 1.0);
        self.slope.angle_degrees = self.slope.angle_degrees.clamp(0.0, 180.0);
        self.curvature.sensitivity = self
            .curvature
            .sensitivity
            .clamp(0.0, MAX_CURVATURE_SENSITIVITY);
        self
    }

    /// Brush radius squared, for the sphere test
    pub fn radius_sq(&self) -> f32 {
        self.size * self.size
    }

    /// Brush texture rotation in radians
    pub fn angle_radians(&self) -> f32 {
        self.angle_degrees.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = BrushSettings::default();
        assert_eq!(settings.size, DEFAULT_BRUSH_SIZE);
        assert_eq!(settings.mode, BrushMode::Add);
        assert_eq!(settings.channels, [true; 4]);
        assert!(!settings.slope.enabled);
        assert!(!settings.curvature.enabled);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings =
            BrushSettings::from_json_str(r#"{ "size": 2.0, "mode": "blur" }"#).unwrap();
        assert_eq!(settings.size, 2.0);
        assert_eq!(settings.mode, BrushMode::Blur);
        assert_eq!(settings.falloff, DEFAULT_FALLOFF);
        assert_eq!(settings.slope.angle_degrees, DEFAULT_SLOPE_ANGLE_DEGREES);
    }

    #[test]
    fn test_json_roundtrip_preserves_masks() {
        let mut settings = BrushSettings::default();
        settings.slope.enabled = true;
        settings.curvature.invert = true;
        settings.channels = [true, false, false, true];

        let json = settings.to_json_string().unwrap();
        let parsed = BrushSettings::from_json_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(BrushSettings::from_json_str("{ size: }").is_err());
        assert!(BrushSettings::from_json_str(r#"{ "mode": "smudge" }"#).is_err());
    }

    #[test]
    fn test_sanitize_clamps_ranges() {
        let settings = BrushSettings {
            size: -3.0,
            falloff: 2.0,
            strength: -1.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.size, MIN_BRUSH_SIZE);
        assert_eq!(settings.falloff, 1.0);
        assert_eq!(settings.strength, 0.0);

        let settings = BrushSettings {
            size: f32::NAN,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.size, DEFAULT_BRUSH_SIZE);
    }

    #[test]
    fn test_derived_values() {
        let mut settings = BrushSettings {
            size: 3.0,
            ..Default::default()
        };
        settings.slope.angle_degrees = 60.0;
        assert!((settings.radius_sq() - 9.0).abs() < 1e-6);
        assert!((settings.slope.angle_cos() - 0.5).abs() < 1e-5);

        settings.slope.angle_degrees = 0.0;
        assert!((settings.slope.angle_cos() - 1.0).abs() < 1e-6);
    }
}
