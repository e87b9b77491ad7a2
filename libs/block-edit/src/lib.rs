//! # Block Edit
//!
//! Structural edits on brace-delimited text without a grammar.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → BlockScanner<HeaderPattern> → Segments → policy → Edited text
//! ```
//!
//! A *block* is a header line, optional blank lines, a line that is exactly
//! `{`, and everything up to the line where brace depth returns to zero.
//! Everything else is a verbatim line. Policies decide per block whether to
//! keep it; kept blocks and lines are copied byte-for-byte in order.
//!
//! ## Example
//!
//! ```rust
//! use block_edit::{remove_duplicate_blocks, SeenHeaders};
//!
//! let gdt = "\"a\" ( \"t\" )\n{\n}\n\"a\" ( \"t\" )\n{\n}\n";
//! let mut seen = SeenHeaders::new();
//! let edited = remove_duplicate_blocks(gdt, &mut seen);
//! assert_eq!(edited.text, "\"a\" ( \"t\" )\n{\n}\n");
//! ```

pub mod error;
pub mod file;
pub mod pattern;
pub mod policy;
pub mod scanner;

pub use error::EditError;
pub use file::{read_text, rewrite_in_place, rewrite_to, write_atomically};
pub use pattern::{BrushHeader, GdtHeader};
pub use policy::{
    remove_brushes, remove_duplicate_blocks, retain_blocks, Edited, RemovedBlock, SeenHeaders,
};
pub use scanner::{Block, BlockScanner, HeaderPattern, Segment};
