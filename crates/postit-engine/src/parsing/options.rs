use serde::Serialize;

use super::inline::RuleKind;

/// Switches that change how a note is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParseOptions {
    /// When off, the note is shown verbatim as a single text block.
    pub markdown: bool,
    /// Turns bare `http(s)://` URLs into links.
    pub autolinks: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            markdown: true,
            autolinks: true,
        }
    }
}

impl ParseOptions {
    /// Options for a note with markdown switched off.
    pub fn verbatim() -> Self {
        Self {
            markdown: false,
            ..Self::default()
        }
    }

    pub(crate) fn allows(&self, kind: RuleKind) -> bool {
        match kind {
            RuleKind::Autolink => self.autolinks,
            _ => true,
        }
    }
}
