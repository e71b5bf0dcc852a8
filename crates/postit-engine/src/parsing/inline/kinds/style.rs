use serde::Serialize;

/// A named text style understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Style {
    Header1,
    Header2,
    Header3,
    Bold,
    Italic,
    BoldItalic,
    Underline,
    Code,
}

impl Style {
    /// Every style tag the renderer has to recognise.
    pub const ALL: [Style; 8] = [
        Style::Header1,
        Style::Header2,
        Style::Header3,
        Style::Bold,
        Style::Italic,
        Style::BoldItalic,
        Style::Underline,
        Style::Code,
    ];

    /// Closes any styled run, whatever its tag.
    pub const CLOSE: &'static str = "</>";

    pub fn tag_name(self) -> &'static str {
        match self {
            Style::Header1 => "Header1",
            Style::Header2 => "Header2",
            Style::Header3 => "Header3",
            Style::Bold => "Bold",
            Style::Italic => "Italic",
            Style::BoldItalic => "BoldItalic",
            Style::Underline => "Underline",
            Style::Code => "Code",
        }
    }

    pub fn from_tag_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.tag_name() == name)
    }

    /// Wraps `inner` in this style's tag.
    pub fn wrap(self, inner: &str) -> String {
        format!("<{}>{inner}{}", self.tag_name(), Self::CLOSE)
    }
}
