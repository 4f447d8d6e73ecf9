//! Keyboard shortcuts and toggle states.

/// What a keydown means to the search modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKey {
    /// Cmd+K (Mac) or Ctrl+K (Windows/Linux).
    Open,
    /// Escape.
    Close,
    /// Anything else.
    Ignored,
}

impl ModalKey {
    /// Classify a keydown.
    pub fn from_event(key: &str, ctrl: bool, meta: bool) -> Self {
        match key {
            "k" if ctrl || meta => Self::Open,
            "Escape" => Self::Close,
            _ => Self::Ignored,
        }
    }
}

/// Result of pressing the mobile TOC toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisclosureState {
    /// New `aria-expanded` value.
    pub expanded: bool,

    /// New `hidden` value of the controlled content.
    pub hidden: bool,
}

impl DisclosureState {
    /// Next state from the current `aria-expanded` attribute.
    pub fn toggle(aria_expanded: Option<&str>) -> Self {
        let was_expanded = aria_expanded == Some("true");
        Self {
            expanded: !was_expanded,
            hidden: was_expanded,
        }
    }

    /// `aria-expanded` attribute value.
    pub fn aria_value(self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_shortcut() {
        assert_eq!(ModalKey::from_event("k", true, false), ModalKey::Open);
        assert_eq!(ModalKey::from_event("k", false, true), ModalKey::Open);
        assert_eq!(ModalKey::from_event("k", false, false), ModalKey::Ignored);
        assert_eq!(ModalKey::from_event("K", true, false), ModalKey::Ignored);
    }

    #[test]
    fn test_escape_closes() {
        assert_eq!(ModalKey::from_event("Escape", false, false), ModalKey::Close);
        assert_eq!(ModalKey::from_event("Enter", true, true), ModalKey::Ignored);
    }

    #[test]
    fn test_disclosure_toggle() {
        let opened = DisclosureState::toggle(Some("false"));
        assert!(opened.expanded);
        assert!(!opened.hidden);
        assert_eq!(opened.aria_value(), "true");

        let closed = DisclosureState::toggle(Some("true"));
        assert!(!closed.expanded);
        assert!(closed.hidden);

        assert_eq!(DisclosureState::toggle(None), opened);
    }
}
