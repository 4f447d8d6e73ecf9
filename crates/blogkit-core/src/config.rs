//! Page enhancement configuration.
//!
//! Every field defaults to the values the blog templates are written against,
//! so `Config::default()` is a complete configuration. Pages may override it
//! with an inline JSON document; tooling may keep it in TOML.

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    search::{PostRecord, default_posts},
};

/// Main configuration structure for blogkit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Browser storage keys.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Table of contents settings.
    #[serde(default)]
    pub toc: TocConfig,

    /// Share button settings.
    #[serde(default)]
    pub share: ShareConfig,

    /// Visitor counter settings.
    #[serde(default)]
    pub counter: CounterConfig,

    /// Search modal settings.
    #[serde(default)]
    pub search: SearchConfig,
}

/// localStorage key configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Key holding the saved theme preference.
    #[serde(default = "default_theme_key")]
    pub theme_key: String,

    /// Prefix of the per-path visitor count keys.
    #[serde(default = "default_visitor_prefix")]
    pub visitor_prefix: String,
}

/// Table of contents configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TocConfig {
    /// IntersectionObserver root margin used by the scroll-spy.
    #[serde(default = "default_root_margin")]
    pub root_margin: String,

    /// Id of the heading that opens the visibility window.
    #[serde(default = "default_window_start")]
    pub window_start_id: String,

    /// Id of the section that closes the visibility window.
    #[serde(default = "default_window_end")]
    pub window_end_id: String,

    /// Pixels before the start heading at which the TOC appears.
    #[serde(default = "default_window_lead")]
    pub window_lead: f64,
}

/// Share button configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Toast text shown after the link is copied.
    #[serde(default = "default_toast_message")]
    pub toast_message: String,

    /// How long the toast stays visible (milliseconds).
    #[serde(default = "default_toast_duration")]
    pub toast_duration_ms: u32,

    /// Tweet intent endpoint.
    #[serde(default = "default_twitter_intent")]
    pub twitter_intent_url: String,

    /// `window.open` features for the share popup.
    #[serde(default = "default_popup_features")]
    pub popup_features: String,
}

/// Visitor counter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Whether the remote hit counter is queried.
    #[serde(default = "default_true")]
    pub remote_enabled: bool,

    /// Base URL of the hit counter API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Counter namespace for this site.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

/// Search modal configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Hint shown while the query is empty.
    #[serde(default = "default_hint")]
    pub hint: String,

    /// Pathname fragment identifying a post page.
    #[serde(default = "default_posts_marker")]
    pub posts_path_marker: String,

    /// Prefix added to post URLs when searching from a post page.
    #[serde(default = "default_posts_prefix")]
    pub posts_url_prefix: String,

    /// Searchable posts.
    #[serde(default = "default_posts")]
    pub posts: Vec<PostRecord>,
}

// Default value functions
fn default_theme_key() -> String {
    "blog-theme".to_string()
}

fn default_visitor_prefix() -> String {
    "visitor-count-".to_string()
}

fn default_root_margin() -> String {
    "-100px 0px -60% 0px".to_string()
}

fn default_window_start() -> String {
    "overview".to_string()
}

fn default_window_end() -> String {
    "conclusion".to_string()
}

fn default_window_lead() -> f64 {
    200.0
}

fn default_toast_message() -> String {
    "Link copied to clipboard!".to_string()
}

fn default_toast_duration() -> u32 {
    2500
}

fn default_twitter_intent() -> String {
    "https://twitter.com/intent/tweet".to_string()
}

fn default_popup_features() -> String {
    "width=550,height=420".to_string()
}

fn default_true() -> bool {
    true
}

fn default_api_base() -> String {
    "https://api.countapi.xyz/hit".to_string()
}

fn default_namespace() -> String {
    "foruth-blog".to_string()
}

fn default_hint() -> String {
    "Type to search posts by title, content, or tags...".to_string()
}

fn default_posts_marker() -> String {
    "/posts/".to_string()
}

fn default_posts_prefix() -> String {
    "../".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            theme_key: default_theme_key(),
            visitor_prefix: default_visitor_prefix(),
        }
    }
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            root_margin: default_root_margin(),
            window_start_id: default_window_start(),
            window_end_id: default_window_end(),
            window_lead: default_window_lead(),
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            toast_message: default_toast_message(),
            toast_duration_ms: default_toast_duration(),
            twitter_intent_url: default_twitter_intent(),
            popup_features: default_popup_features(),
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            remote_enabled: true,
            api_base: default_api_base(),
            namespace: default_namespace(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            hint: default_hint(),
            posts_path_marker: default_posts_marker(),
            posts_url_prefix: default_posts_prefix(),
            posts: default_posts(),
        }
    }
}

impl Config {
    /// Parse configuration from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| CoreError::config_with_source("Failed to parse TOML config", e))?;

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a JSON document, as embedded in a page.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CoreError::config_with_source("Failed to parse JSON config", e))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.storage.theme_key.is_empty() {
            return Err(CoreError::config("storage.theme_key cannot be empty"));
        }

        if self.storage.visitor_prefix.is_empty() {
            return Err(CoreError::config("storage.visitor_prefix cannot be empty"));
        }

        if self.counter.remote_enabled && self.counter.namespace.is_empty() {
            return Err(CoreError::config(
                "counter.namespace cannot be empty while the remote counter is enabled",
            ));
        }

        if self.share.toast_duration_ms == 0 {
            return Err(CoreError::config("share.toast_duration_ms must be positive"));
        }

        for (i, post) in self.search.posts.iter().enumerate() {
            if post.title.trim().is_empty() {
                return Err(CoreError::config(format!("search.posts[{i}].title cannot be empty")));
            }
            if post.url.trim().is_empty() {
                return Err(CoreError::config(format!("search.posts[{i}].url cannot be empty")));
            }
        }

        if self.counter.api_base.ends_with('/') {
            tracing::warn!("counter.api_base should not have a trailing slash");
        }

        Ok(())
    }
}
