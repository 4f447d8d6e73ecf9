//! External links and lazy images inside the article.

use blogkit_core::links::{
    EXTERNAL_LINK_ATTRIBUTES, EXTERNAL_LINK_SELECTOR, LAZY_IMAGE_SELECTOR, is_external,
};
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use crate::{error::Result, page::Page};

/// Open off-site article links in a new tab without an opener.
pub fn init_external(page: &Page) -> Result<()> {
    let hostname = page.hostname()?;
    let mut marked = 0usize;

    for link in page.query_all(EXTERNAL_LINK_SELECTOR)? {
        let Some(anchor) = link.dyn_ref::<HtmlAnchorElement>() else {
            continue;
        };
        if !is_external(&anchor.hostname(), &hostname) {
            continue;
        }
        for (name, value) in EXTERNAL_LINK_ATTRIBUTES {
            link.set_attribute(name, value)?;
        }
        marked += 1;
    }

    log::debug!("{marked} external links open in a new tab");
    Ok(())
}

/// Defer loading of article images that don't choose a strategy.
pub fn init_lazy_images(page: &Page) -> Result<()> {
    for image in page.query_all(LAZY_IMAGE_SELECTOR)? {
        image.set_attribute("loading", "lazy")?;
    }
    Ok(())
}
