//! # Inline Formatting
//!
//! Rewrites the content of text and bullet blocks into tagged runs such as
//! `<Bold>…</>` and `<a id="browser" href="…">…</>`.
//!
//! ## Architecture
//!
//! A block's content starts as one raw [`Chunk`]. Rules from the fixed
//! [`rules::table`] run one after another; each match splits its chunk into
//! before / finalized / after parts. Finalized chunks are never scanned
//! again, so styles never nest and a rule cannot match inside another
//! rule's output.
//!
//! ## Modules
//!
//! - **`chunk`**: `Chunk`, `ChunkList`, `Replacement`
//! - **`kinds`**: `Style`, `Link`, `Escape` (tag vocabulary and delimiters)
//! - **`rules`**: the ordered, block-type-gated rule table
//! - **`format`**: `format_inline()` entry point

pub mod chunk;
pub mod format;
pub mod kinds;
pub mod rules;

pub use chunk::{Chunk, ChunkList, Replacement};
pub use format::{format_inline, format_inline_with};
pub use kinds::{Link, Style};
pub use rules::{InlineRule, RuleKind};
