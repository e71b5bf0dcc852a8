use crate::parsing::{blocks::BlockType, options::ParseOptions};

use super::{chunk::ChunkList, rules};

/// Formats one block's content with the default options.
///
/// See [`format_inline_with`].
pub fn format_inline(content: &str, block_type: BlockType) -> String {
    format_inline_with(content, block_type, &ParseOptions::default())
}

/// Rewrites a block's content into tagged runs.
///
/// Each rule in the table is run over the chunks not yet claimed by an
/// earlier rule. Code and separator content is returned unchanged. The
/// output is meant to be produced once per input; formatting it again is
/// not guaranteed to be a no-op.
pub fn format_inline_with(content: &str, block_type: BlockType, options: &ParseOptions) -> String {
    if !matches!(block_type, BlockType::Text | BlockType::Bullet) {
        return content.to_string();
    }

    let mut chunks = ChunkList::new(content);
    for rule in rules::table() {
        if !rule.applies_to(block_type) || !options.allows(rule.kind()) {
            continue;
        }
        let matches = chunks.apply(|text| rule.find(text));
        if matches > 0 {
            log::trace!("{:?} matched {matches} time(s)", rule.kind());
        }
    }
    chunks.flatten()
}
