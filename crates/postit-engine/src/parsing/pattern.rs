use regex::{Regex, RegexBuilder};

/// Compiles one of the parser's built-in patterns.
///
/// Every structural and inline pattern is matched case-insensitively. The
/// patterns are compile-time constants, so a failure here is a programming
/// error caught by the unit tests of the owning kind.
pub(crate) fn compile(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("Invalid built-in pattern")
}
