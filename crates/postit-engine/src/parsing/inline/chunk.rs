use std::ops::Range;

/// A piece of a block's content during inline formatting.
///
/// Finalized chunks hold the output of a completed rule match and are never
/// scanned again. This is what keeps styled spans from nesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub text: String,
    pub finalized: bool,
}

impl Chunk {
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            finalized: false,
        }
    }

    pub fn finalized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            finalized: true,
        }
    }
}

/// A rule match inside one chunk: the byte range it covers and what replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub range: Range<usize>,
    pub text: String,
}

/// The ordered chunks making up one block's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkList {
    chunks: Vec<Chunk>,
}

impl ChunkList {
    pub fn new(content: &str) -> Self {
        Self {
            chunks: vec![Chunk::raw(content)],
        }
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Applies one rule across every unfinalized chunk.
    ///
    /// `find` is asked for the first match inside a chunk's text. On a match
    /// the chunk is split into before / finalized replacement / after, and
    /// scanning resumes at the after part, so every occurrence is replaced
    /// but no replacement is ever looked at again. Returns the match count.
    pub fn apply(&mut self, mut find: impl FnMut(&str) -> Option<Replacement>) -> usize {
        let mut matches = 0;
        let mut i = 0;

        while i < self.chunks.len() {
            if self.chunks[i].finalized {
                i += 1;
                continue;
            }
            let Some(found) = find(&self.chunks[i].text) else {
                i += 1;
                continue;
            };

            let text = std::mem::take(&mut self.chunks[i].text);
            let before = &text[..found.range.start];
            let after = &text[found.range.end..];

            let mut parts = Vec::with_capacity(3);
            if !before.is_empty() {
                parts.push(Chunk::raw(before));
            }
            let finalized_at = i + parts.len();
            parts.push(Chunk::finalized(found.text));
            if !after.is_empty() {
                parts.push(Chunk::raw(after));
            }

            self.chunks.splice(i..=i, parts);
            i = finalized_at + 1;
            matches += 1;
        }

        matches
    }

    /// Joins all chunks back into a single string.
    pub fn flatten(self) -> String {
        self.chunks.into_iter().map(|c| c.text).collect()
    }
}
