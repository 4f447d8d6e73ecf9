//! Clickable post cards.

use blogkit_core::cards::{
    CARD_SELECTOR, CardClick, TAG_CHIP_SELECTOR, TITLE_LINK_SELECTOR, TITLE_SELECTOR,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlAnchorElement};

use crate::{dom, error::Result, page::Page};

/// Make each `.post-card` navigate to its title link.
pub fn init(page: &Page) -> Result<()> {
    for card in page.query_all(CARD_SELECTOR)? {
        let Some(link) = card
            .query_selector(TITLE_LINK_SELECTOR)?
            .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
        else {
            continue;
        };

        let window = page.window.clone();
        dom::listen(&card, "click", move |event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let click = CardClick {
                in_tag_chip: dom::within(&target, TAG_CHIP_SELECTOR),
                is_anchor: target.tag_name().eq_ignore_ascii_case("a"),
                in_title: dom::within(&target, TITLE_SELECTOR),
            };
            if click.navigates() {
                let _ = window.location().set_href(&link.href());
            }
        })?;
    }

    Ok(())
}
