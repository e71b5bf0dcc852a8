use html_escape::{encode_double_quoted_attribute, encode_text};

/// Hyperlink markup handed to the renderer.
pub struct Link;

impl Link {
    /// Decorator id the renderer routes link clicks through.
    pub const ID: &'static str = "browser";

    /// Appended to the label of a link written without a target.
    pub const NO_URL: &'static str = "(No URL)";

    /// Renders an anchor tag. The href is attribute-escaped so a stray quote
    /// in the URL cannot terminate the attribute early, and the label is
    /// text-escaped so it cannot open or close tags of its own.
    pub fn anchor(href: &str, label: &str) -> String {
        format!(
            r#"<a id="{}" href="{}">{}</>"#,
            Self::ID,
            encode_double_quoted_attribute(href),
            encode_text(label)
        )
    }

    /// Renders `[label](url)`, filling in whichever half is missing.
    pub fn markdown(label: &str, url: &str) -> String {
        let label = match (label.is_empty(), url.is_empty()) {
            (true, true) => Self::NO_URL.to_string(),
            (true, false) => url.to_string(),
            (false, true) => format!("{label} {}", Self::NO_URL),
            (false, false) => label.to_string(),
        };
        Self::anchor(url, &label)
    }

    /// Renders a bare URL, labelled with itself.
    pub fn autolink(url: &str) -> String {
        Self::anchor(url, url)
    }
}
