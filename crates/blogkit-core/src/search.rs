//! Post search for the search modal.
//!
//! The searchable set is a short, fixed list of posts. Matching is a
//! case-insensitive substring test over title, excerpt and tags; results keep
//! the list order.

use serde::{Deserialize, Serialize};

/// A searchable post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Post title.
    pub title: String,

    /// Post URL, relative to the site root.
    pub url: String,

    /// Short summary.
    #[serde(default)]
    pub excerpt: String,

    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PostRecord {
    /// Create a new post record.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        excerpt: impl Into<String>,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            excerpt: excerpt.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the post matches a normalized (lowercased, trimmed) query.
    pub fn matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query)
            || self.excerpt.to_lowercase().contains(query)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(query))
    }
}

/// Posts published on the blog.
pub fn default_posts() -> Vec<PostRecord> {
    vec![
        PostRecord::new(
            "Windows Privilege Escalation via Weak Service Permissions",
            "posts/Windows Privilege Escalation Weak Service Permissions.html",
            "Exploiting weak ACLs and service permissions to escalate from standard user to \
             SYSTEM on Windows.",
            ["Windows Security", "Privilege Escalation", "Service Permissions"],
        ),
        PostRecord::new(
            "Windows UAC Bypass via DLL Hijacking Walkthrough",
            "posts/Windows UAC Bypass DLL Hijacking.html",
            "Exploiting auto-elevating binaries and missing DLLs to gain elevated privileges \
             on Windows 10.",
            ["Windows Security", "UAC Bypass", "DLL Hijacking"],
        ),
    ]
}

/// A run of text, either plain or matching the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSegment {
    pub text: String,
    pub marked: bool,
}

impl HighlightSegment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            marked: false,
        }
    }

    fn marked(text: &str) -> Self {
        Self {
            text: text.to_string(),
            marked: true,
        }
    }
}

/// A post matching the query, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMatch {
    pub url: String,
    pub title: Vec<HighlightSegment>,
    pub excerpt: Vec<HighlightSegment>,
    pub tags: Vec<String>,
}

/// What the result pane shows for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Empty query: show the hint.
    Hint,

    /// Nothing matched the normalized query.
    NoResults { query: String },

    /// Matching posts in list order.
    Matches(Vec<PostMatch>),
}

/// The searchable post list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIndex {
    posts: Vec<PostRecord>,
}

impl SearchIndex {
    /// Create an index over `posts`.
    pub fn new(posts: Vec<PostRecord>) -> Self {
        Self { posts }
    }

    /// Create an index whose URLs resolve from the current page.
    ///
    /// Post URLs are relative to the site root; on a page whose path
    /// contains `posts_marker` they get `prefix` prepended.
    pub fn for_page(
        posts: Vec<PostRecord>,
        pathname: &str,
        posts_marker: &str,
        prefix: &str,
    ) -> Self {
        if posts_marker.is_empty() || !pathname.contains(posts_marker) {
            return Self::new(posts);
        }

        let posts = posts
            .into_iter()
            .map(|post| PostRecord {
                url: format!("{prefix}{}", post.url),
                ..post
            })
            .collect();
        Self::new(posts)
    }

    /// Indexed posts.
    pub fn posts(&self) -> &[PostRecord] {
        &self.posts
    }

    /// Run a query.
    pub fn search(&self, raw_query: &str) -> SearchOutcome {
        let query = normalize_query(raw_query);
        if query.is_empty() {
            return SearchOutcome::Hint;
        }

        let matches: Vec<PostMatch> = self
            .posts
            .iter()
            .filter(|post| post.matches(&query))
            .map(|post| PostMatch {
                url: post.url.clone(),
                title: highlight(&post.title, &query),
                excerpt: highlight(&post.excerpt, &query),
                tags: post.tags.clone(),
            })
            .collect();

        tracing::debug!(query = %query, matches = matches.len(), "search");

        if matches.is_empty() {
            SearchOutcome::NoResults { query }
        } else {
            SearchOutcome::Matches(matches)
        }
    }
}

/// Lowercase and trim a raw query.
pub fn normalize_query(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Split `text` into plain and marked runs, marking every case-insensitive
/// occurrence of the lowercase `query`.
pub fn highlight(text: &str, query: &str) -> Vec<HighlightSegment> {
    if text.is_empty() {
        return Vec::new();
    }
    if query.is_empty() {
        return vec![HighlightSegment::plain(text)];
    }

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        if let Some(len) = match_len_at(&text[pos..], query) {
            if plain_start < pos {
                segments.push(HighlightSegment::plain(&text[plain_start..pos]));
            }
            segments.push(HighlightSegment::marked(&text[pos..pos + len]));
            pos += len;
            plain_start = pos;
        } else {
            pos += text[pos..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if plain_start < text.len() {
        segments.push(HighlightSegment::plain(&text[plain_start..]));
    }

    segments
}

/// Byte length of the prefix of `haystack` whose lowercase form equals
/// `needle`.
fn match_len_at(haystack: &str, needle: &str) -> Option<usize> {
    let mut needle_chars = needle.chars().peekable();

    for (offset, c) in haystack.char_indices() {
        for lower in c.to_lowercase() {
            if needle_chars.next() != Some(lower) {
                return None;
            }
        }
        if needle_chars.peek().is_none() {
            return Some(offset + c.len_utf8());
        }
    }

    None
}
