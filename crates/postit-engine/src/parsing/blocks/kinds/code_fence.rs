use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::parsing::{blocks::BlockKind, pattern};

/// Fenced code delimited by triple backticks.
///
/// Text after the opening fence is a language tag and is discarded. A fence
/// that is never closed runs to the end of the input.
pub struct CodeFence;

impl CodeFence {
    pub const PATTERN: &'static str = concat!(
        r"(?m)(?:\r?\n)?^```[^\r\n]*(?:\r?\n)?",
        r"((?s:.*?))",
        r"(?:(?:\r?\n)?^```[ \t]*\r?$(?:\r?\n)?|(?:\r?\n)?\z)",
    );

    pub fn regex() -> &'static Regex {
        static REGEX: OnceLock<Regex> = OnceLock::new();
        REGEX.get_or_init(|| pattern::compile(Self::PATTERN))
    }

    pub fn build(caps: &Captures<'_>) -> BlockKind {
        BlockKind::Code {
            content: caps.get(1).map_or("", |m| m.as_str()).to_string(),
        }
    }
}
