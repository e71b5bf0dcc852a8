use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::parsing::{blocks::BlockKind, pattern};

/// Horizontal rule: a line made only of three or more hyphens.
pub struct Separator;

impl Separator {
    /// The adjoining line breaks are consumed so no blank text is left behind.
    pub const PATTERN: &'static str = r"(?m)(?:\r?\n)?^-{3,}\r?$(?:\r?\n)?";

    pub fn regex() -> &'static Regex {
        static REGEX: OnceLock<Regex> = OnceLock::new();
        REGEX.get_or_init(|| pattern::compile(Self::PATTERN))
    }

    pub fn build(_caps: &Captures<'_>) -> BlockKind {
        BlockKind::Separator
    }
}
