//! # Config Crate
//!
//! Centralized configuration constants for the collision-map pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, UNIT_SCALE, round_coord};
//!
//! // Use EPSILON for degeneracy checks
//! let area: f64 = 0.00001;
//! assert!(area < EPSILON);
//!
//! // Coordinates are rounded before they are written to a map
//! assert_eq!(round_coord(1.0 * UNIT_SCALE), 39.37);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Deterministic Output**: Rounding rules live next to the tolerances they feed
//! - **Radiant Compatible**: Defaults match what the level editor expects

pub mod constants;
pub mod settings;

pub use settings::{BrushSettings, ConfigError};
