use std::fmt::Write;

use crate::parsing::blocks::{Block, BlockKind};

/// Renders blocks one per line as `Kind@start..end "content"`.
///
/// Bullets include their raw indent and tier. Line breaks inside content are
/// escaped so every block stays on one line.
pub fn normalize(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        let span = block.span;
        let _ = match &block.kind {
            BlockKind::Text { content } => {
                writeln!(out, "Text@{}..{} {content:?}", span.start, span.end)
            }
            BlockKind::Separator => writeln!(out, "Separator@{}..{}", span.start, span.end),
            BlockKind::Code { content } => {
                writeln!(out, "Code@{}..{} {content:?}", span.start, span.end)
            }
            BlockKind::Bullet {
                content,
                indent_level,
            } => writeln!(
                out,
                "Bullet({indent_level}/{})@{}..{} {content:?}",
                block.indent_tier(),
                span.start,
                span.end
            ),
        };
    }
    out
}
