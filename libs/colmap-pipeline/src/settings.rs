//! # Run Settings
//!
//! The single JSON record (`data.json`) read once per run. Every run uses a
//! subset of the fields, so all of them are optional here and each run asks
//! for what it needs.
//!
//! ```json
//! {
//!     "mesh_names": ["wall_a", "wall_b"],
//!     "geometry_dir": "exports",
//!     "output_dir": "collmaps",
//!     "material_type": "physics",
//!     "gdt_path": "model_export.gdt",
//!     "invalid_brushes": [{ "mesh": "wall_a", "brushes": [3, 17] }]
//! }
//! ```

use crate::error::SettingsError;
use config::constants::{DEFAULT_LIGHTMAP, EXTRUDE_DISTANCE, UNIT_SCALE};
use config::BrushSettings;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Built-in material types and the clip texture each resolves to.
pub const DEFAULT_MATERIAL_TYPES: &[(&str, &str)] = &[
    ("full", "clip_full"),
    ("missile", "clip_missile"),
    ("physics", "clip_physics"),
    ("player", "clip_player"),
];

/// Brushes to strip from one mesh's map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BrushRemoval {
    #[serde(default)]
    pub mesh: String,
    #[serde(default)]
    pub brushes: Vec<u64>,
}

/// Parsed run configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RunSettings {
    #[serde(default)]
    pub mesh_names: Vec<String>,
    /// Where mesh geometry exports (`<mesh>.json`) are read from.
    #[serde(default)]
    pub geometry_dir: Option<PathBuf>,
    /// Where `<mesh>.map` files are written and cleaned.
    #[serde(default, alias = "coll_maps_dir")]
    pub output_dir: Option<PathBuf>,
    #[serde(default = "default_material_type")]
    pub material_type: String,
    /// Extra or overriding entries for [`DEFAULT_MATERIAL_TYPES`].
    #[serde(default)]
    pub material_types: BTreeMap<String, String>,
    #[serde(default = "default_lightmap")]
    pub lightmap: String,
    #[serde(default = "default_extrude_distance")]
    pub extrude_distance: f64,
    #[serde(default = "default_unit_scale")]
    pub unit_scale: f64,
    #[serde(default)]
    pub gdt_path: Option<PathBuf>,
    #[serde(default = "default_gdt_output_path")]
    pub gdt_output_path: PathBuf,
    #[serde(default)]
    pub invalid_brushes: Vec<BrushRemoval>,
}

fn default_material_type() -> String {
    "physics".to_string()
}

fn default_lightmap() -> String {
    DEFAULT_LIGHTMAP.to_string()
}

fn default_extrude_distance() -> f64 {
    EXTRUDE_DISTANCE
}

fn default_unit_scale() -> f64 {
    UNIT_SCALE
}

fn default_gdt_output_path() -> PathBuf {
    PathBuf::from("output_deduped.gdt")
}

impl RunSettings {
    /// Parses settings from JSON text. Relative paths are left as written.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Reads settings from a file, resolving relative paths against the
    /// file's directory.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut settings = Self::from_json(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(base) = path.parent() {
            settings.resolve_paths(base);
        }
        Ok(settings)
    }

    /// Joins every relative path onto `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        self.geometry_dir.iter_mut().for_each(resolve);
        self.output_dir.iter_mut().for_each(resolve);
        self.gdt_path.iter_mut().for_each(resolve);
        resolve(&mut self.gdt_output_path);
    }

    /// Texture tag for the configured material type.
    ///
    /// Entries in `material_types` take precedence over the built-in table.
    pub fn material_tag(&self) -> Result<&str, SettingsError> {
        if let Some(tag) = self.material_types.get(&self.material_type) {
            return Ok(tag.as_str());
        }
        DEFAULT_MATERIAL_TYPES
            .iter()
            .find(|(kind, _)| *kind == self.material_type)
            .map(|(_, tag)| *tag)
            .ok_or_else(|| SettingsError::UnknownMaterialType(self.material_type.clone()))
    }

    /// Validated brush parameters for this run.
    pub fn brush_settings(&self) -> Result<BrushSettings, SettingsError> {
        let material = self.material_tag()?;
        Ok(BrushSettings::new(
            self.extrude_distance,
            self.unit_scale,
            material,
            self.lightmap.as_str(),
        )?)
    }

    /// The output directory, required by map generation and brush removal.
    pub fn require_output_dir(&self) -> Result<&Path, SettingsError> {
        self.output_dir
            .as_deref()
            .ok_or(SettingsError::Missing("output_dir"))
    }

    /// The geometry directory, required by map generation.
    pub fn require_geometry_dir(&self) -> Result<&Path, SettingsError> {
        self.geometry_dir
            .as_deref()
            .ok_or(SettingsError::Missing("geometry_dir"))
    }

    /// The GDT input, required by deduplication.
    pub fn require_gdt_path(&self) -> Result<&Path, SettingsError> {
        self.gdt_path
            .as_deref()
            .ok_or(SettingsError::Missing("gdt_path"))
    }
}
