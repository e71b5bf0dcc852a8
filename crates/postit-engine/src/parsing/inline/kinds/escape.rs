/// Backslash escapes that make a markup character literal.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: char = '\\';

    /// Escapable characters, in the order their escapes are removed.
    pub const CHARS: [char; 4] = ['*', '`', '_', '#'];

    /// Pattern matching the escaped form of `c`.
    pub fn pattern(c: char) -> String {
        format!(r"\\{}", regex::escape(&c.to_string()))
    }
}
