//! Table of contents model.

/// Headings collected from the article.
pub const HEADING_SELECTOR: &str = "h2, h3";

/// Containers hidden when the article has no headings.
pub const WRAPPER_SELECTOR: &str = ".toc-card, .toc";

/// Class marking the link of the heading currently in view.
pub const ACTIVE_CLASS: &str = "active";

/// Class hiding the TOC outside its visibility window.
pub const HIDDEN_CLASS: &str = "toc-hidden";

/// Heading level included in the table of contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H2,
    H3,
}

impl HeadingLevel {
    /// Level for an element tag name, e.g. `H2`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_uppercase().as_str() {
            "H2" => Some(Self::H2),
            "H3" => Some(Self::H3),
            _ => None,
        }
    }

    /// Class of the TOC link for this level.
    pub fn link_class(self) -> &'static str {
        match self {
            Self::H2 => "toc-h2",
            Self::H3 => "toc-h3",
        }
    }
}

/// Table of contents entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TocEntry {
    /// Heading level.
    pub level: HeadingLevel,

    /// Heading text.
    pub text: String,

    /// Anchor ID.
    pub id: String,
}

impl TocEntry {
    /// Create a new TOC entry.
    pub fn new(level: HeadingLevel, text: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            id: id.into(),
        }
    }

    /// Fragment link to the heading.
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Build a URL-friendly anchor id from heading text.
///
/// Keeps ASCII word characters, turns whitespace and hyphen runs into a
/// single `-` and drops everything else. Edge hyphens are kept, so
/// `"🚀 Launch"` becomes `-launch`. Falls back to `section-<index>` when
/// nothing survives.
pub fn slugify(text: &str, index: usize) -> String {
    let mut slug = String::with_capacity(text.len());

    for c in text.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            slug.push(c);
        } else if (c.is_whitespace() || c == '-') && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    if slug.is_empty() {
        format!("section-{index}")
    } else {
        slug
    }
}

/// Scroll range in which the table of contents is shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityWindow {
    /// First visible scroll offset.
    pub start: f64,

    /// Last visible scroll offset.
    pub end: f64,
}

impl VisibilityWindow {
    /// Window from the top of the opening heading (less `lead` pixels) to the
    /// bottom of the closing section.
    pub fn new(start_top: f64, lead: f64, end_top: f64, end_height: f64) -> Self {
        Self {
            start: start_top - lead,
            end: end_top + end_height,
        }
    }

    /// Whether the TOC is shown at this scroll offset.
    pub fn contains(&self, scroll_y: f64) -> bool {
        scroll_y >= self.start && scroll_y <= self.end
    }
}
