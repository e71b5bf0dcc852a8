use regex::{Captures, Regex};

use crate::parsing::span::Span;

use super::{
    kinds::{Bullet, CodeFence, Separator},
    types::{Block, BlockKind},
};

/// Builds the block for one structural match.
type BuildFn = fn(&Captures<'_>) -> BlockKind;

/// Splits raw text into typed blocks.
///
/// Never fails. Text without structural markup comes back as a single text
/// block; empty input yields no blocks at all.
pub fn segment(raw: &str) -> Vec<Block> {
    if raw.is_empty() {
        return vec![];
    }

    let mut blocks = vec![Block::text(Span::new(0, raw.len()), raw)];

    // Order matters: separators first, then fences, then bullets.
    split_text_blocks(&mut blocks, Separator::regex(), Separator::build);
    split_text_blocks(&mut blocks, CodeFence::regex(), CodeFence::build);
    split_text_blocks(&mut blocks, Bullet::regex(), Bullet::build);

    log::trace!("segmented {} bytes into {} blocks", raw.len(), blocks.len());
    blocks
}

/// Runs one structural pass over every text block in `blocks`.
fn split_text_blocks(blocks: &mut Vec<Block>, regex: &Regex, build: BuildFn) {
    let previous = std::mem::take(blocks);
    blocks.reserve(previous.len());

    for block in previous {
        match &block.kind {
            BlockKind::Text { content } => {
                let replaced = split_text(content, block.span.start, regex, build);
                if replaced.is_empty() {
                    blocks.push(block);
                } else {
                    blocks.extend(replaced);
                }
            }
            _ => blocks.push(block),
        }
    }
}

/// Splits a single text block. Returns an empty list when nothing matched.
fn split_text(text: &str, base: usize, regex: &Regex, build: BuildFn) -> Vec<Block> {
    let mut out = Vec::new();
    let mut cursor = 0;

    for caps in regex.captures_iter(text) {
        let Some(m) = caps.get(0) else { continue };

        push_text(&mut out, text, cursor, m.start(), base);
        out.push(Block::new(Span::from(m.range()).offset(base), build(&caps)));
        cursor = m.end();
    }

    if out.is_empty() {
        return out;
    }

    push_text(&mut out, text, cursor, text.len(), base);
    out
}

/// Emits the text between two matches, skipping empty segments.
fn push_text(out: &mut Vec<Block>, text: &str, start: usize, end: usize, base: usize) {
    if end > start {
        out.push(Block::text(
            Span::new(start, end).offset(base),
            &text[start..end],
        ));
    }
}
