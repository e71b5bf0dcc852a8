//! # Note Parsing
//!
//! Turns raw note text into typed [`Block`]s whose text carries inline tag
//! markup for the renderer.
//!
//! ```text
//! raw text → segment() → Vec<Block> → format_inline() per Text/Bullet → Vec<Block>
//! ```
//!
//! The whole pipeline is a pure function of its input. Every call parses
//! from scratch; there is no incremental state.

pub mod blocks;
pub mod inline;
pub mod options;
pub(crate) mod pattern;
pub mod snapshot;
pub mod span;

#[cfg(test)]
mod tests;

pub use blocks::{Block, BlockKind, BlockType, segment};
pub use inline::{format_inline, format_inline_with};
pub use options::ParseOptions;
pub use span::Span;

/// Parses a note with the default options.
pub fn parse(raw: &str) -> Vec<Block> {
    parse_with(raw, &ParseOptions::default())
}

/// Parses a note: segments it into blocks, then formats every text and
/// bullet block exactly once.
pub fn parse_with(raw: &str, options: &ParseOptions) -> Vec<Block> {
    if !options.markdown {
        return verbatim(raw);
    }

    let mut blocks = segment(raw);
    for block in &mut blocks {
        format_block(block, options);
    }
    blocks
}

/// The whole note as one unformatted text block.
fn verbatim(raw: &str) -> Vec<Block> {
    if raw.is_empty() {
        return vec![];
    }
    vec![Block::text(Span::new(0, raw.len()), raw)]
}

fn format_block(block: &mut Block, options: &ParseOptions) {
    let block_type = block.block_type();
    if !matches!(block_type, BlockType::Text | BlockType::Bullet) {
        return;
    }
    if let Some(content) = block.kind.content_mut() {
        *content = format_inline_with(content, block_type, options);
    }
}
