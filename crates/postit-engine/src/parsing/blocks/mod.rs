//! # Block Segmentation
//!
//! Splits raw note text into an ordered list of typed [`Block`]s.
//!
//! ## Passes
//!
//! Segmentation runs three structural passes in a fixed order, each one over
//! the `Text` blocks left by the previous pass:
//!
//! 1. **Separator** (`---`)
//! 2. **Fenced code** (```` ``` ````)
//! 3. **Bullet** (`- item`, indented by 0, 2 or 4 spaces)
//!
//! A pass replaces one text block with the blocks it found plus the
//! surrounding text; empty text between matches is dropped.
//!
//! ## Modules
//!
//! - **`types`**: `Block`, `BlockKind`, `BlockType`
//! - **`kinds`**: one type per structural kind, each owning its pattern
//! - **`segment`**: `segment()` entry point and the pass driver
//!
//! ## Key Invariants
//!
//! - Block spans are contiguous and cover the whole input
//! - A text block's unformatted content is exactly its source slice

pub mod kinds;
pub mod segment;
pub mod types;

pub use segment::segment;
pub use types::{Block, BlockKind, BlockType, indent_tier};
