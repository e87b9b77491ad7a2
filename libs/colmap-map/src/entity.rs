//! # Map Entities
//!
//! Entities are named attribute sets; `worldspawn` additionally owns the
//! brushes. Attribute order is preserved exactly as inserted.

use crate::guid::{Guid, IdSource};
use colmap_geometry::{Brush, Face};
use config::constants::{LIGHTMAP_PROJECTION, MATERIAL_PROJECTION};
use std::fmt::{self, Write};

/// Environment and render defaults written on every worldspawn.
pub const WORLDSPAWN_DEFAULTS: &[(&str, &str)] = &[
    ("fsi", "default"),
    ("gravity", "800"),
    ("lodbias", "default"),
    ("lutmaterial", "luts_t7_default"),
    ("numOmniShadowSlices", "24"),
    ("numSpotShadowSlices", "64"),
    ("sky_intensity_factor0", "1"),
    ("sky_intensity_factor1", "1"),
    ("state_alias_1", "State 1"),
    ("state_alias_2", "State 2"),
    ("state_alias_3", "State 3"),
    ("state_alias_4", "State 4"),
];

/// Placement defaults for the misc_model referencing the source mesh.
pub const MISC_MODEL_DEFAULTS: &[(&str, &str)] = &[
    ("angles", "0 0 0"),
    ("modelscale", "1"),
    ("origin", "0 0 0"),
];

/// A brush paired with the GUID it is written under.
#[derive(Debug, Clone, PartialEq)]
pub struct MapBrush {
    /// Identifier written on the brush's `guid` line.
    pub guid: Guid,
    /// The validated geometry.
    pub brush: Brush,
}

/// A map entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    guid: Guid,
    classname: String,
    attributes: Vec<(String, String)>,
    brushes: Vec<MapBrush>,
}

impl Entity {
    /// Creates an entity with no attributes or brushes.
    pub fn new(classname: impl Into<String>, guid: Guid) -> Self {
        Self {
            guid,
            classname: classname.into(),
            attributes: Vec::new(),
            brushes: Vec::new(),
        }
    }

    /// The worldspawn entity holding `brushes`, each given a fresh GUID.
    pub fn worldspawn(brushes: Vec<Brush>, ids: &impl IdSource) -> Self {
        let mut entity = Self::new("worldspawn", ids.fresh_id()).with_attributes(WORLDSPAWN_DEFAULTS);
        entity.brushes = brushes
            .into_iter()
            .map(|brush| MapBrush {
                guid: ids.fresh_id(),
                brush,
            })
            .collect();
        entity
    }

    /// A misc_model entity placing `model` at the origin.
    pub fn misc_model(model: &str, ids: &impl IdSource) -> Self {
        let mut entity = Self::new("misc_model", ids.fresh_id());
        entity.set("model", model);
        entity.with_attributes(MISC_MODEL_DEFAULTS)
    }

    /// Appends an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((key.into(), value.into()));
    }

    fn with_attributes(mut self, pairs: &[(&str, &str)]) -> Self {
        for (key, value) in pairs {
            self.set(*key, *value);
        }
        self
    }

    /// Identifier on the entity's `guid` line.
    #[inline]
    pub fn guid(&self) -> Guid {
        self.guid
    }

    /// Value of the `classname` attribute.
    #[inline]
    pub fn classname(&self) -> &str {
        &self.classname
    }

    /// Looks up the first attribute with `key`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Brushes in output order.
    #[inline]
    pub fn brushes(&self) -> &[MapBrush] {
        &self.brushes
    }

    /// Writes the entity as `// entity <index>` followed by its block.
    pub fn render(&self, index: usize, out: &mut impl Write) -> fmt::Result {
        writeln!(out, "// entity {index}")?;
        writeln!(out, "{{")?;
        writeln!(out, "guid \"{}\"", self.guid)?;
        writeln!(out, "\"classname\" \"{}\"", self.classname)?;
        for (key, value) in &self.attributes {
            writeln!(out, "\"{key}\" \"{value}\"")?;
        }
        for (number, map_brush) in self.brushes.iter().enumerate() {
            render_brush(number, map_brush, out)?;
        }
        writeln!(out, "}}")
    }
}

fn render_brush(number: usize, map_brush: &MapBrush, out: &mut impl Write) -> fmt::Result {
    let brush = &map_brush.brush;
    writeln!(out, "// brush {number}")?;
    writeln!(out, "{{")?;
    writeln!(out, " guid \"{}\"", map_brush.guid)?;
    for face in brush.faces() {
        write!(out, " ")?;
        render_face_points(face, out)?;
        writeln!(
            out,
            " {} {MATERIAL_PROJECTION} {} {LIGHTMAP_PROJECTION}",
            brush.material(),
            brush.lightmap()
        )?;
    }
    writeln!(out, "}}")
}

fn render_face_points(face: &Face, out: &mut impl Write) -> fmt::Result {
    let mut first = true;
    for p in &face.points {
        if !first {
            write!(out, " ")?;
        }
        first = false;
        write!(out, "( {} {} {} )", p.x, p.y, p.z)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guid::RandomIds;

    #[test]
    fn test_misc_model_attribute_order() {
        let entity = Entity::misc_model("crate_large", &RandomIds);
        let mut text = String::new();
        entity.render(1, &mut text).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "// entity 1");
        assert_eq!(lines[1], "{");
        assert!(lines[2].starts_with("guid \"{"));
        assert_eq!(lines[3], "\"classname\" \"misc_model\"");
        assert_eq!(lines[4], "\"model\" \"crate_large\"");
        assert_eq!(lines.last(), Some(&"}"));
        assert_eq!(entity.attribute("origin"), Some("0 0 0"));
    }

    #[test]
    fn test_empty_worldspawn_has_defaults_only() {
        let entity = Entity::worldspawn(Vec::new(), &RandomIds);
        assert_eq!(entity.classname(), "worldspawn");
        assert!(entity.brushes().is_empty());
        assert_eq!(entity.attribute("gravity"), Some("800"));
    }
}
