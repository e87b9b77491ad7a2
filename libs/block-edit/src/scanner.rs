//! # Block Scanner
//!
//! Lazy line scanner that splits text into verbatim lines and balanced
//! blocks.
//!
//! ## Example
//!
//! ```rust
//! use block_edit::{BlockScanner, BrushHeader, Segment};
//!
//! let text = "// brush 0\n{\n}\ntrailer\n";
//! let segments: Vec<_> = BlockScanner::new(text, BrushHeader).collect();
//! assert!(matches!(segments[0], Segment::Block(ref b) if b.key == 0));
//! assert!(matches!(segments[1], Segment::Line("trailer\n")));
//! ```

use std::ops::Range;

// =============================================================================
// HEADER PATTERN
// =============================================================================

/// Recognizes block header lines.
///
/// Implementations receive the line with surrounding whitespace trimmed and
/// return the key identifying the block, or `None` for ordinary lines.
pub trait HeaderPattern {
    /// Block identity extracted from the header.
    type Key;

    /// Matches a trimmed line.
    fn match_header(&self, line: &str) -> Option<Self::Key>;
}

// =============================================================================
// SEGMENTS
// =============================================================================

/// A confirmed block: header through the line closing its outermost brace.
#[derive(Debug, Clone, PartialEq)]
pub struct Block<'a, K> {
    /// Key returned by the header pattern.
    pub key: K,
    /// Header line, trimmed.
    pub header: &'a str,
    /// Line range `[start, end)` in the source, header included.
    pub lines: Range<usize>,
    /// Exact source text of the block, line terminators included.
    pub text: &'a str,
}

/// One unit of scanner output.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'a, K> {
    /// A line outside any block, terminator included.
    Line(&'a str),
    /// A whole block.
    Block(Block<'a, K>),
}

impl<'a, K> Segment<'a, K> {
    /// Source text covered by this segment.
    pub fn text(&self) -> &'a str {
        match self {
            Segment::Line(line) => line,
            Segment::Block(block) => block.text,
        }
    }
}

// =============================================================================
// SCANNER
// =============================================================================

/// Iterator over the [`Segment`]s of a text.
///
/// Concatenating the text of every segment reproduces the input exactly.
pub struct BlockScanner<'a, P> {
    /// Source text.
    source: &'a str,
    /// Lines with their terminators.
    lines: Vec<&'a str>,
    /// Byte offset of each line, plus one trailing entry for the end.
    offsets: Vec<usize>,
    /// Net brace count of all lines before each index, plus the total.
    depth: Vec<i64>,
    /// Lowest value of `depth` from each index to the end.
    floor: Vec<i64>,
    /// Next line to scan.
    pos: usize,
    pattern: P,
}

impl<'a, P: HeaderPattern> BlockScanner<'a, P> {
    /// Create a scanner for source text.
    pub fn new(source: &'a str, pattern: P) -> Self {
        let lines: Vec<&str> = source.split_inclusive('\n').collect();
        let mut offsets = Vec::with_capacity(lines.len() + 1);
        let mut offset = 0;
        for line in &lines {
            offsets.push(offset);
            offset += line.len();
        }
        offsets.push(offset);

        let mut depth = Vec::with_capacity(lines.len() + 1);
        let mut running = 0i64;
        depth.push(running);
        for line in &lines {
            running += line.matches('{').count() as i64;
            running -= line.matches('}').count() as i64;
            depth.push(running);
        }
        let mut floor = depth.clone();
        for i in (0..floor.len().saturating_sub(1)).rev() {
            floor[i] = floor[i].min(floor[i + 1]);
        }

        Self {
            source,
            lines,
            offsets,
            depth,
            floor,
            pos: 0,
            pattern,
        }
    }

    /// Finds the exclusive end line of a block whose header is at `header`.
    ///
    /// Returns `None` when the next non-blank line is not exactly `{`, or
    /// when the braces never balance.
    fn block_end(&self, header: usize) -> Option<usize> {
        let open = (header + 1..self.lines.len()).find(|&i| !self.lines[i].trim().is_empty())?;
        if self.lines[open].trim() != "{" {
            return None;
        }

        // The block closes at the first later line where the running depth
        // drops back to its value before `open`. If it never gets that low
        // again there is nothing to scan for.
        let base = self.depth[open];
        if self.floor[open + 1] > base {
            log::warn!(
                "block at line {} is never closed; keeping its header as plain text",
                header + 1
            );
            return None;
        }
        (open + 1..self.depth.len()).find(|&end| self.depth[end] <= base)
    }
}

impl<'a, P: HeaderPattern> Iterator for BlockScanner<'a, P> {
    type Item = Segment<'a, P::Key>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos;
        let line = *self.lines.get(start)?;

        if let Some(key) = self.pattern.match_header(line.trim()) {
            if let Some(end) = self.block_end(start) {
                let source = self.source;
                self.pos = end;
                return Some(Segment::Block(Block {
                    key,
                    header: line.trim(),
                    lines: start..end,
                    text: &source[self.offsets[start]..self.offsets[end]],
                }));
            }
        }

        self.pos += 1;
        Some(Segment::Line(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{BrushHeader, GdtHeader};

    fn collect<P: HeaderPattern>(text: &str, pattern: P) -> Vec<Segment<'_, P::Key>> {
        BlockScanner::new(text, pattern).collect()
    }

    #[test]
    fn test_segments_reproduce_input() {
        let text = "iwmap 4\n// brush 0\n{\n ( 0 0 0 )\n}\n\n// brush 1\n\n{\n}\nend";
        let rebuilt: String = collect(text, BrushHeader).iter().map(Segment::text).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_block_range_and_text() {
        let text = "top\n// brush 7\n{\n a\n}\nbottom\n";
        let segments = collect(text, BrushHeader);
        assert_eq!(segments.len(), 3);
        match &segments[1] {
            Segment::Block(block) => {
                assert_eq!(block.key, 7);
                assert_eq!(block.header, "// brush 7");
                assert_eq!(block.lines, 1..5);
                assert_eq!(block.text, "// brush 7\n{\n a\n}\n");
            }
            other => panic!("expected block, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_lines_between_header_and_brace() {
        let text = "\"x\" ( \"t\" )\n\n   \n{\n}\n";
        let segments = collect(text, GdtHeader);
        assert_eq!(segments.len(), 1);
        assert!(matches!(&segments[0], Segment::Block(b) if b.lines == (0..5)));
    }

    #[test]
    fn test_header_without_brace_is_plain_text() {
        let text = "// brush 3\n ( 1 2 3 )\n{\n}\n";
        let segments = collect(text, BrushHeader);
        assert!(segments.iter().all(|s| matches!(s, Segment::Line(_))));
        assert_eq!(segments.len(), 4);
    }

    #[test]
    fn test_header_at_end_of_file() {
        let segments = collect("// brush 3\n\n", BrushHeader);
        assert_eq!(segments, vec![Segment::Line("// brush 3\n"), Segment::Line("\n")]);
    }

    #[test]
    fn test_nested_braces_are_tracked() {
        let text = "// brush 0\n{\n  patch\n  {\n   ( 1 )\n  }\n}\nafter\n";
        let segments = collect(text, BrushHeader);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1], Segment::Line("after\n"));
    }

    #[test]
    fn test_braces_inside_guid_lines_balance() {
        let text = "// brush 0\n{\n guid \"{AB-CD}\"\n}\nafter\n";
        let segments = collect(text, BrushHeader);
        assert!(matches!(&segments[0], Segment::Block(b) if b.lines == (0..4)));
    }

    #[test]
    fn test_unterminated_block_degrades_to_lines() {
        let text = "// brush 0\n{\n ( 1 )\n";
        let segments = collect(text, BrushHeader);
        assert_eq!(segments.len(), 3);
        assert!(segments.iter().all(|s| matches!(s, Segment::Line(_))));
    }

    #[test]
    fn test_closed_block_inside_unclosed_region() {
        let text = "// brush 0\n{\n{\n// brush 1\n{\n}\ntail\n";
        let segments = collect(text, BrushHeader);
        assert_eq!(segments.len(), 5);
        assert!(matches!(&segments[0], Segment::Line("// brush 0\n")));
        match &segments[3] {
            Segment::Block(block) => {
                assert_eq!(block.key, 1);
                assert_eq!(block.lines, 3..6);
            }
            other => panic!("expected block, got {other:?}"),
        }
        assert_eq!(segments[4], Segment::Line("tail\n"));
    }

    #[test]
    fn test_many_unclosed_headers_stay_lines() {
        let mut text = String::new();
        for n in 0..5000 {
            text.push_str(&format!("// brush {n}\n{{\n ( {n} )\n"));
        }
        let segments = collect(&text, BrushHeader);
        assert_eq!(segments.len(), 15000);
        assert!(segments.iter().all(|s| matches!(s, Segment::Line(_))));
        let rebuilt: String = segments.iter().map(Segment::text).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_crlf_is_preserved() {
        let text = "// brush 1\r\n{\r\n}\r\nkeep\r\n";
        let segments = collect(text, BrushHeader);
        assert_eq!(segments[0].text(), "// brush 1\r\n{\r\n}\r\n");
        assert_eq!(segments[1], Segment::Line("keep\r\n"));
    }
}
