//! Collapsible TOC on small screens.

use blogkit_core::keys::DisclosureState;
use web_sys::HtmlElement;

use crate::{dom, error::Result, page::Page};

/// Bind `#toc-toggle` to show and hide `#toc-content`.
pub fn init(page: &Page) -> Result<()> {
    let (Some(toggle), Some(content)) = (
        page.by_id("toc-toggle"),
        page.by_id_as::<HtmlElement>("toc-content"),
    ) else {
        return Ok(());
    };

    let button = toggle.clone();
    dom::listen(&toggle, "click", move |_| {
        let next = DisclosureState::toggle(button.get_attribute("aria-expanded").as_deref());
        let _ = button.set_attribute("aria-expanded", next.aria_value());
        content.set_hidden(next.hidden);
    })
}
