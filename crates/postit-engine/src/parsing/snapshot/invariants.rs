use crate::parsing::blocks::{Block, BlockKind, segment};

/// Validates block span invariants against the raw input.
///
/// Holds for formatted output too, since formatting never moves spans.
///
/// Asserts that:
/// - Block spans are in bounds, ordered, contiguous and cover the input
/// - No block has an empty span
/// - Code content is a verbatim slice of its source span
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(raw: &str, blocks: &[Block]) {
    let mut cursor = 0;
    for b in blocks {
        assert!(
            b.span.start <= b.span.end && b.span.end <= raw.len(),
            "block span out of bounds: {:?} (input len: {})",
            b.span,
            raw.len()
        );
        assert_eq!(
            b.span.start, cursor,
            "block span does not continue the previous one: {:?}",
            b.span
        );
        assert!(!b.span.is_empty(), "empty block span at {}", b.span.start);

        let source = b.span.slice(raw);
        if let BlockKind::Code { content } = &b.kind {
            assert!(
                source.contains(content.as_str()),
                "code content {content:?} not found in its source {source:?}"
            );
        }
        cursor = b.span.end;
    }
    assert_eq!(cursor, raw.len(), "blocks do not cover the whole input");
}

/// Segments `raw` and checks that every text block is its own source slice.
///
/// # Panics
/// Panics if [`check`] fails or a text block differs from its source.
pub fn check_segmentation(raw: &str) -> Vec<Block> {
    let blocks = segment(raw);
    check(raw, &blocks);
    for b in &blocks {
        if let BlockKind::Text { content } = &b.kind {
            assert_eq!(content, b.span.slice(raw), "text block differs from source");
        }
    }
    blocks
}
