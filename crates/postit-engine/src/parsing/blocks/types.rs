use serde::Serialize;

use crate::parsing::span::Span;

/// Leading spaces that make up one visual bullet indent tier.
pub const SPACES_PER_INDENT: u8 = 2;

/// Deepest visual indent tier a bullet is drawn at.
pub const MAX_INDENT_TIER: u8 = 2;

/// The payload-free discriminant of a [`BlockKind`].
///
/// Inline rules are gated on this: headers only apply to plain text, code is
/// never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BlockType {
    Text,
    Separator,
    Code,
    Bullet,
}

/// One structurally distinct unit of a parsed note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum BlockKind {
    /// Paragraph text, possibly carrying inline tag markup once formatted.
    Text { content: String },
    /// A horizontal rule.
    Separator,
    /// Fenced code. Never receives inline formatting.
    Code { content: String },
    /// A single list item.
    Bullet {
        content: String,
        /// Raw count of leading spaces in the source line (0, 2 or 4).
        indent_level: u8,
    },
}

impl BlockKind {
    pub fn block_type(&self) -> BlockType {
        match self {
            BlockKind::Text { .. } => BlockType::Text,
            BlockKind::Separator => BlockType::Separator,
            BlockKind::Code { .. } => BlockType::Code,
            BlockKind::Bullet { .. } => BlockType::Bullet,
        }
    }

    /// The text payload, if this kind carries one.
    pub fn content(&self) -> Option<&str> {
        match self {
            BlockKind::Text { content }
            | BlockKind::Code { content }
            | BlockKind::Bullet { content, .. } => Some(content),
            BlockKind::Separator => None,
        }
    }

    pub(crate) fn content_mut(&mut self) -> Option<&mut String> {
        match self {
            BlockKind::Text { content }
            | BlockKind::Code { content }
            | BlockKind::Bullet { content, .. } => Some(content),
            BlockKind::Separator => None,
        }
    }
}

/// A parsed block together with the source span it was produced from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub span: Span,
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl Block {
    pub fn new(span: Span, kind: BlockKind) -> Self {
        Self { span, kind }
    }

    pub fn text(span: Span, content: impl Into<String>) -> Self {
        Self::new(
            span,
            BlockKind::Text {
                content: content.into(),
            },
        )
    }

    pub fn block_type(&self) -> BlockType {
        self.kind.block_type()
    }

    pub fn content(&self) -> Option<&str> {
        self.kind.content()
    }

    /// Visual indent tier of a bullet: 0, 1 or 2. Non-bullets are tier 0.
    pub fn indent_tier(&self) -> u8 {
        match self.kind {
            BlockKind::Bullet { indent_level, .. } => indent_tier(indent_level),
            _ => 0,
        }
    }
}

/// Maps a raw leading-space count onto a visual indent tier.
pub fn indent_tier(indent_level: u8) -> u8 {
    (indent_level / SPACES_PER_INDENT).min(MAX_INDENT_TIER)
}
