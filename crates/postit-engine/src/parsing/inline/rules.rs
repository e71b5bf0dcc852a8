use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::parsing::{blocks::BlockType, pattern};

use super::{
    chunk::Replacement,
    kinds::{Escape, Link, Style},
};

const TEXT_ONLY: &[BlockType] = &[BlockType::Text];
const TEXT_AND_BULLET: &[BlockType] = &[BlockType::Text, BlockType::Bullet];

/// Span content: any character but a line break, with `\x` pairs consumed
/// whole so an escaped delimiter can never close the span.
const INNER: &str = r"((?:\\[^\r\n]|[^\\\r\n])+?)";

/// A bare URL. Parentheses only count as part of it in balanced pairs, and
/// it never ends on sentence punctuation.
const AUTOLINK: &str = concat!(
    r#"https?://(?:\([^\s()<>\[\]"`]*\)|[^\s()<>\[\]"`])*"#,
    r#"(?:\([^\s()<>\[\]"`]*\)|[^\s()<>\[\]"`.,:;!?}'*_])"#,
);

/// Characters that veto an autolink when they directly precede the URL,
/// i.e. the URL already sits inside markup.
const AUTOLINK_VETO: &[char] = &['"', '\'', '=', '>'];

/// What a rule produces for its match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Wraps capture 1 in a style tag.
    Style(Style),
    /// `[label](url)`.
    Link,
    /// A bare `http(s)://` URL.
    Autolink,
    /// Drops the backslash of an escaped character.
    Unescape(char),
}

/// One pattern + replacement + eligibility triple.
#[derive(Debug)]
pub struct InlineRule {
    kind: RuleKind,
    regex: Regex,
    targets: &'static [BlockType],
    /// A match directly preceded by one of these is skipped.
    veto: &'static [char],
}

impl InlineRule {
    fn new(kind: RuleKind, pattern: &str, targets: &'static [BlockType]) -> Self {
        Self {
            kind,
            regex: pattern::compile(pattern),
            targets,
            veto: &[],
        }
    }

    /// Makes a backslash before the opening delimiter suppress the match.
    fn escapable(mut self) -> Self {
        self.veto = &[Escape::BACKSLASH];
        self
    }

    fn vetoed_by(mut self, veto: &'static [char]) -> Self {
        self.veto = veto;
        self
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn applies_to(&self, block_type: BlockType) -> bool {
        self.targets.contains(&block_type)
    }

    /// Finds the leftmost match in `text` that is not vetoed.
    pub fn find(&self, text: &str) -> Option<Replacement> {
        let mut from = 0;
        while from <= text.len() {
            let caps = self.regex.captures_at(text, from)?;
            let m = caps.get(0)?;

            let vetoed = text[..m.start()]
                .chars()
                .next_back()
                .is_some_and(|prev| self.veto.contains(&prev));
            if !vetoed {
                return Some(Replacement {
                    range: m.range(),
                    text: self.render(&caps),
                });
            }

            from = m.start() + text[m.start()..].chars().next().map_or(1, char::len_utf8);
        }
        None
    }

    fn render(&self, caps: &Captures<'_>) -> String {
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());
        match self.kind {
            RuleKind::Style(style) => style.wrap(group(1)),
            RuleKind::Link => Link::markdown(group(1), group(2)),
            RuleKind::Autolink => Link::autolink(group(0)),
            RuleKind::Unescape(c) => c.to_string(),
        }
    }
}

/// The inline rule table, in application order. Order is significant:
/// headers before everything, code before emphasis, the longest asterisk
/// run before shorter ones, and unescaping last.
pub fn table() -> &'static [InlineRule] {
    static TABLE: OnceLock<Vec<InlineRule>> = OnceLock::new();
    TABLE.get_or_init(build_table)
}

fn build_table() -> Vec<InlineRule> {
    let mut rules = vec![
        InlineRule::new(RuleKind::Style(Style::Header3), r"(?m)^### ([^\r\n]+)", TEXT_ONLY),
        InlineRule::new(RuleKind::Style(Style::Header2), r"(?m)^## ([^\r\n]+)", TEXT_ONLY),
        InlineRule::new(RuleKind::Style(Style::Header1), r"(?m)^# ([^\r\n]+)", TEXT_ONLY),
        InlineRule::new(RuleKind::Style(Style::Code), &format!("`{INNER}`"), TEXT_AND_BULLET).escapable(),
        InlineRule::new(
            RuleKind::Link,
            r"\[([^\r\n]*?)\]\(([^\r\n]*?)\)",
            TEXT_AND_BULLET,
        ),
        InlineRule::new(RuleKind::Autolink, AUTOLINK, TEXT_AND_BULLET).vetoed_by(AUTOLINK_VETO),
        InlineRule::new(
            RuleKind::Style(Style::BoldItalic),
            &format!(r"\*\*\*{INNER}\*\*\*"),
            TEXT_AND_BULLET,
        )
        .escapable(),
        InlineRule::new(
            RuleKind::Style(Style::Bold),
            &format!(r"\*\*{INNER}\*\*"),
            TEXT_AND_BULLET,
        )
        .escapable(),
        InlineRule::new(RuleKind::Style(Style::Italic), &format!(r"\*{INNER}\*"), TEXT_AND_BULLET)
            .escapable(),
        InlineRule::new(
            RuleKind::Style(Style::Underline),
            &format!("__{INNER}__"),
            TEXT_AND_BULLET,
        )
        .escapable(),
    ];

    rules.extend(
        Escape::CHARS
            .into_iter()
            .map(|c| InlineRule::new(RuleKind::Unescape(c), &Escape::pattern(c), TEXT_AND_BULLET)),
    );

    rules
}
