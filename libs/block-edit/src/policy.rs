//! # Edit Policies
//!
//! Keep-or-drop decisions layered over [`BlockScanner`]. Both policies share
//! [`retain_blocks`]; they differ only in header pattern and predicate.

use crate::pattern::{BrushHeader, GdtHeader};
use crate::scanner::{Block, BlockScanner, HeaderPattern, Segment};
use std::collections::{BTreeSet, HashSet};
use std::ops::Range;

/// Header strings already kept during one deduplication pass.
pub type SeenHeaders = HashSet<String>;

/// A block dropped from the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedBlock {
    /// Trimmed header line of the dropped block.
    pub header: String,
    /// Line range `[start, end)` in the input.
    pub lines: Range<usize>,
}

/// Output of an edit: the new text plus what was dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Edited {
    /// Edited text.
    pub text: String,
    /// Dropped blocks, in input order.
    pub removed: Vec<RemovedBlock>,
}

impl Edited {
    /// True when at least one block was dropped.
    pub fn is_changed(&self) -> bool {
        !self.removed.is_empty()
    }
}

/// Copies `text`, dropping every block for which `keep` returns false.
///
/// Lines outside blocks are always copied. Nothing is reordered and kept
/// text is byte-identical to the input.
///
/// # Example
///
/// ```rust
/// use block_edit::{retain_blocks, BrushHeader};
///
/// let text = "// brush 0\n{\n}\n// brush 1\n{\n}\n";
/// let edited = retain_blocks(text, BrushHeader, |block| block.key % 2 == 1);
/// assert_eq!(edited.text, "// brush 1\n{\n}\n");
/// assert_eq!(edited.removed[0].lines, 0..3);
/// ```
pub fn retain_blocks<P, F>(text: &str, pattern: P, mut keep: F) -> Edited
where
    P: HeaderPattern,
    F: FnMut(&Block<'_, P::Key>) -> bool,
{
    let mut edited = Edited {
        text: String::with_capacity(text.len()),
        removed: Vec::new(),
    };

    for segment in BlockScanner::new(text, pattern) {
        match segment {
            Segment::Line(line) => edited.text.push_str(line),
            Segment::Block(block) => {
                if keep(&block) {
                    edited.text.push_str(block.text);
                } else {
                    edited.removed.push(RemovedBlock {
                        header: block.header.to_string(),
                        lines: block.lines,
                    });
                }
            }
        }
    }

    edited
}

/// Drops every GDT block whose header was already seen.
///
/// The first block with a given header wins regardless of body differences.
/// `seen` is updated with every kept header, so passing the same set to
/// several calls deduplicates across them.
pub fn remove_duplicate_blocks(text: &str, seen: &mut SeenHeaders) -> Edited {
    retain_blocks(text, GdtHeader, |block| seen.insert(block.key.clone()))
}

/// Drops the `// brush <N>` blocks whose number is in `targets`.
///
/// Block ends are found by brace depth, so brushes with nested structures
/// are removed whole.
pub fn remove_brushes(text: &str, targets: &BTreeSet<u64>) -> Edited {
    retain_blocks(text, BrushHeader, |block| {
        let drop = targets.contains(&block.key);
        if drop {
            log::debug!("removing brush {}", block.key);
        }
        !drop
    })
}
