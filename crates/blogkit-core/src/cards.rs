//! Clickable post cards.

/// Post card containers.
pub const CARD_SELECTOR: &str = ".post-card";

/// Title link of a card.
pub const TITLE_LINK_SELECTOR: &str = ".post-card__title a";

/// Card title container.
pub const TITLE_SELECTOR: &str = ".post-card__title";

/// Tag chips inside a card.
pub const TAG_CHIP_SELECTOR: &str = ".tag-chip";

/// Where a click on a card landed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardClick {
    /// The target is a tag chip or inside one.
    pub in_tag_chip: bool,

    /// The target itself is an anchor.
    pub is_anchor: bool,

    /// The target is inside the card title.
    pub in_title: bool,
}

impl CardClick {
    /// Whether the card should navigate to its post.
    ///
    /// Tag chips and links other than the title keep their own behaviour.
    pub fn navigates(self) -> bool {
        !(self.in_tag_chip || (self.is_anchor && !self.in_title))
    }
}
