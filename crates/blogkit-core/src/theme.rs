//! Light/dark theme selection.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Media query matching a dark system color scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Root element attribute carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Page color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Attribute and storage value for this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Theme following the system color scheme.
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Theme a toggle switches to, given the current attribute value.
    ///
    /// Only an explicit `dark` switches to light; a missing or unknown value
    /// switches to dark.
    pub fn toggle_from(current: Option<&str>) -> Self {
        match current.map(str::parse::<Theme>) {
            Some(Ok(theme)) => theme.toggled(),
            _ => Self::Dark,
        }
    }

    /// Pick the initial theme.
    ///
    /// Priority: saved preference, then the page's default attribute, then
    /// the system color scheme. Values that are not a known theme are skipped.
    pub fn resolve(saved: Option<&str>, page_default: Option<&str>, system_dark: bool) -> Self {
        [saved, page_default]
            .into_iter()
            .flatten()
            .find_map(|value| match value.parse() {
                Ok(theme) => Some(theme),
                Err(err) => {
                    tracing::debug!("ignoring theme value: {err}");
                    None
                }
            })
            .unwrap_or_else(|| Self::from_system(system_dark))
    }
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(CoreError::invalid_theme(other)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!("Dark".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn test_saved_preference_wins() {
        assert_eq!(Theme::resolve(Some("light"), Some("dark"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), None, false), Theme::Dark);
    }

    #[test]
    fn test_page_default_before_system() {
        assert_eq!(Theme::resolve(None, Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(None, Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn test_system_fallback() {
        assert_eq!(Theme::resolve(None, None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, None, false), Theme::Light);
    }

    #[test]
    fn test_unknown_values_are_skipped() {
        assert_eq!(Theme::resolve(Some("sepia"), Some("dark"), false), Theme::Dark);
        assert_eq!(Theme::resolve(Some(""), Some("auto"), true), Theme::Dark);
    }

    #[test]
    fn test_toggle_from() {
        assert_eq!(Theme::toggle_from(Some("dark")), Theme::Light);
        assert_eq!(Theme::toggle_from(Some("light")), Theme::Dark);
        assert_eq!(Theme::toggle_from(None), Theme::Dark);
        assert_eq!(Theme::toggle_from(Some("auto")), Theme::Dark);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Theme::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
    }
}
