//! Reading progress bar.

use blogkit_core::progress::{bar_width, reading_progress};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::{dom, error::Result, page::Page};

/// Drive the width of `#reading-progress` from the scroll position.
pub fn init(page: &Page) -> Result<()> {
    let Some(bar) = page.by_id_as::<HtmlElement>("reading-progress") else {
        return Ok(());
    };
    let Some(article) = page
        .article()?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };

    let window = page.window.clone();
    dom::listen(&page.window, "scroll", move |_| {
        let window_height = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default();
        let progress = reading_progress(
            f64::from(article.offset_top()),
            f64::from(article.offset_height()),
            window_height,
            window.scroll_y().unwrap_or_default(),
        );
        let _ = bar.style().set_property("width", &bar_width(progress));
    })
}
