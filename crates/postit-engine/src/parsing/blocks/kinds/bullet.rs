use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::parsing::{blocks::BlockKind, pattern};

/// A single `- item` line indented by exactly 0, 2 or 4 spaces.
///
/// Any other indentation is not a bullet and stays plain text.
pub struct Bullet;

impl Bullet {
    pub const PATTERN: &'static str = r"(?m)(?:\r?\n)?^( {4}| {2})?- ([^\r\n]*)\r?$(?:\r?\n)?";

    pub fn regex() -> &'static Regex {
        static REGEX: OnceLock<Regex> = OnceLock::new();
        REGEX.get_or_init(|| pattern::compile(Self::PATTERN))
    }

    pub fn build(caps: &Captures<'_>) -> BlockKind {
        let indent = caps.get(1).map_or(0, |m| m.len());
        BlockKind::Bullet {
            content: caps.get(2).map_or("", |m| m.as_str()).to_string(),
            indent_level: indent as u8,
        }
    }
}
