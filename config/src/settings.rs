//! Brush synthesis settings shared between the geometry and pipeline crates.
//!
//! The constants in [`crate::constants`] provide defaults; a run may
//! override them through its configuration file, so the effective values are
//! bundled and validated here once.

use crate::constants::{DEFAULT_LIGHTMAP, DEFAULT_MATERIAL, EXTRUDE_DISTANCE, UNIT_SCALE};
use std::fmt;

/// Validated parameters controlling how triangles become brushes.
///
/// # Examples
/// ```
/// use config::BrushSettings;
/// let settings = BrushSettings::default();
/// assert_eq!(settings.material, "clip_physics");
/// assert!(settings.extrude_distance > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BrushSettings {
    /// Extrusion along the face normal, in source units.
    pub extrude_distance: f64,
    /// Source-to-target linear unit factor.
    pub unit_scale: f64,
    /// Surface material tag written on every face.
    pub material: String,
    /// Lightmap tag written on every face.
    pub lightmap: String,
}

impl BrushSettings {
    /// Builds settings enforcing strictly positive finite distances and
    /// single-token texture tags.
    ///
    /// # Examples
    /// ```
    /// use config::BrushSettings;
    /// let settings = BrushSettings::new(0.25, 1.0, "clip_player", "lightmap_gray")
    ///     .expect("valid settings");
    /// assert_eq!(settings.unit_scale, 1.0);
    /// assert!(BrushSettings::new(0.0, 1.0, "clip_player", "lightmap_gray").is_err());
    /// ```
    pub fn new(
        extrude_distance: f64,
        unit_scale: f64,
        material: impl Into<String>,
        lightmap: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        if !(extrude_distance.is_finite() && extrude_distance > 0.0) {
            return Err(ConfigError::InvalidExtrusion(extrude_distance));
        }
        if !(unit_scale.is_finite() && unit_scale > 0.0) {
            return Err(ConfigError::InvalidUnitScale(unit_scale));
        }
        let material = material.into();
        let lightmap = lightmap.into();
        for tag in [&material, &lightmap] {
            if tag.is_empty() || tag.contains(char::is_whitespace) {
                return Err(ConfigError::InvalidTextureTag(tag.clone()));
            }
        }
        Ok(Self {
            extrude_distance,
            unit_scale,
            material,
            lightmap,
        })
    }

    /// Extrusion distance expressed in target units.
    pub fn scaled_extrusion(&self) -> f64 {
        self.extrude_distance * self.unit_scale
    }
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            extrude_distance: EXTRUDE_DISTANCE,
            unit_scale: UNIT_SCALE,
            material: DEFAULT_MATERIAL.to_string(),
            lightmap: DEFAULT_LIGHTMAP.to_string(),
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the extrusion distance is zero, negative or not finite.
    InvalidExtrusion(f64),
    /// Raised when the unit scale is zero, negative or not finite.
    InvalidUnitScale(f64),
    /// Raised when a texture tag is empty or would split into several tokens.
    InvalidTextureTag(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidExtrusion(value) => {
                write!(f, "extrude_distance must be positive: {value}")
            }
            ConfigError::InvalidUnitScale(value) => {
                write!(f, "unit_scale must be positive: {value}")
            }
            ConfigError::InvalidTextureTag(tag) => {
                write!(f, "texture tag must be a single non-empty token: {tag:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
