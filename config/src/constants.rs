//! # Configuration Constants
//!
//! Centralized constants for the collision-map pipeline. All geometry
//! tolerances, unit conversion factors and map-format literals are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Degeneracy tolerance and coordinate rounding
//! - **Scaling**: Source-to-target unit conversion and brush thickness
//! - **Texturing**: Default surface material, lightmap and projection fields
//! - **Format**: Map header literals

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance below which geometric quantities are treated as zero.
///
/// Applies to triangle areas, tetrahedron volumes and normal lengths.
/// It is deliberately coarse: coordinates are rounded to four decimal places
/// before validation, so anything finer than that is noise.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn is_degenerate(area: f64) -> bool {
///     area <= EPSILON
/// }
///
/// assert!(is_degenerate(0.00005));
/// assert!(!is_degenerate(0.5));
/// ```
pub const EPSILON: f64 = 1e-4;

/// Number of decimal places kept for every emitted coordinate.
///
/// # Example
///
/// ```rust
/// use config::constants::COORDINATE_DECIMALS;
/// assert_eq!(COORDINATE_DECIMALS, 4);
/// ```
pub const COORDINATE_DECIMALS: i32 = 4;

// =============================================================================
// SCALING CONSTANTS
// =============================================================================

/// Linear unit conversion from Blender meters to Radiant inches.
///
/// # Example
///
/// ```rust
/// use config::constants::UNIT_SCALE;
///
/// let two_meters = 2.0 * UNIT_SCALE;
/// assert!((two_meters - 78.74).abs() < 1e-9);
/// ```
pub const UNIT_SCALE: f64 = 39.37;

/// Distance each triangle is pushed along its normal, in source units.
///
/// Multiplied by the unit scale before use, so the default brush is
/// roughly 6.3 inches thick.
pub const EXTRUDE_DISTANCE: f64 = 0.16;

// =============================================================================
// TEXTURING CONSTANTS
// =============================================================================

/// Surface material applied to every brush face when no material type is
/// configured.
pub const DEFAULT_MATERIAL: &str = "clip_physics";

/// Lightmap applied to every brush face.
pub const DEFAULT_LIGHTMAP: &str = "lightmap_gray";

/// Texture projection fields following the material tag
/// (width, height, x offset, y offset, rotation, reserved).
pub const MATERIAL_PROJECTION: &str = "64 64 0 0 0 0";

/// Texture projection fields following the lightmap tag.
pub const LIGHTMAP_PROJECTION: &str = "16 16 0 0 0 0";

// =============================================================================
// FORMAT CONSTANTS
// =============================================================================

/// Version written on the first line of every map document (`iwmap 4`).
pub const MAP_FORMAT_VERSION: u32 = 4;

/// File extension of generated map documents.
pub const MAP_EXTENSION: &str = "map";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Rounds a coordinate to [`COORDINATE_DECIMALS`] places.
///
/// Rounding is idempotent and folds negative zero into positive zero so the
/// text form never shows `-0`.
///
/// # Example
///
/// ```rust
/// use config::constants::round_coord;
///
/// assert_eq!(round_coord(1.234567), 1.2346);
/// assert_eq!(round_coord(round_coord(1.234567)), 1.2346);
/// assert_eq!(round_coord(-0.00001).to_string(), "0");
/// ```
pub fn round_coord(value: f64) -> f64 {
    let factor = 10f64.powi(COORDINATE_DECIMALS);
    (value * factor).round() / factor + 0.0
}

/// Checks whether a quantity is indistinguishable from zero.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(0.00001));
/// assert!(!approx_zero(0.001));
/// ```
pub fn approx_zero(value: f64) -> bool {
    value.abs() <= EPSILON
}
