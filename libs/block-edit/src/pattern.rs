//! # Header Patterns
//!
//! The two header shapes the pipeline edits:
//!
//! - GDT definition entries: `"name" ( "type" )`
//! - Map brush comments: `// brush <N>`

use crate::scanner::HeaderPattern;

/// Matches GDT entry headers such as `"wall_concrete" ( "material.gdf" )`.
///
/// The key is the whole trimmed header, so two entries are the same only
/// when their header text is identical.
///
/// # Example
///
/// ```rust
/// use block_edit::{GdtHeader, HeaderPattern};
///
/// let key = GdtHeader.match_header("\"crate\" ( \"xmodel.gdf\" )");
/// assert_eq!(key.as_deref(), Some("\"crate\" ( \"xmodel.gdf\" )"));
/// assert_eq!(GdtHeader.match_header("\"type\" \"rigid\""), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GdtHeader;

impl HeaderPattern for GdtHeader {
    type Key = String;

    fn match_header(&self, line: &str) -> Option<String> {
        (line.starts_with('"') && line.contains('(') && line.contains(')'))
            .then(|| line.to_string())
    }
}

/// Matches map brush comments such as `// brush 12`.
///
/// The key is the brush number. Comments without a numeric third token are
/// ordinary lines.
///
/// # Example
///
/// ```rust
/// use block_edit::{BrushHeader, HeaderPattern};
///
/// assert_eq!(BrushHeader.match_header("// brush 12"), Some(12));
/// assert_eq!(BrushHeader.match_header("// entity 0"), None);
/// assert_eq!(BrushHeader.match_header("// brush"), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BrushHeader;

impl HeaderPattern for BrushHeader {
    type Key = u64;

    fn match_header(&self, line: &str) -> Option<u64> {
        let mut tokens = line.split_whitespace();
        if tokens.next()? != "//" || tokens.next()? != "brush" {
            return None;
        }
        tokens.next()?.parse().ok()
    }
}
