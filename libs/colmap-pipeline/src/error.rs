//! # Pipeline Errors
//!
//! Error types for configuration, geometry loading and batch runs.

use colmap_geometry::GeometryError;
use colmap_map::MapError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the run configuration.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Configuration file could not be read
    #[error("failed to read settings {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration file is not valid JSON for the expected shape
    #[error("failed to parse settings {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `material_type` names no known texture tag
    #[error("unknown material type: {0}")]
    UnknownMaterialType(String),

    /// A field needed by the requested run is absent
    #[error("missing setting: {0}")]
    Missing(&'static str),

    /// Brush parameters failed validation
    #[error("invalid brush settings: {0}")]
    Invalid(#[from] config::ConfigError),
}

/// Errors raised while loading mesh geometry.
#[derive(Debug, Error)]
pub enum SourceError {
    /// No geometry exists for the named mesh
    #[error("mesh '{name}' not found")]
    NotFound { name: String },

    /// Geometry export could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Geometry export is malformed
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Geometry export is well-formed but inconsistent
    #[error("invalid geometry for mesh '{name}': {source}")]
    Geometry {
        name: String,
        #[source]
        source: GeometryError,
    },
}

/// Why one mesh produced no map. The run moves on to the next mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Map(#[from] MapError),
}

/// Top-level error for a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Source(#[from] SourceError),

    /// Output directory could not be prepared
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Command line could not be understood
    #[error("{0}")]
    Usage(String),
}
