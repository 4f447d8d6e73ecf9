//! Dark mode toggle.

use blogkit_core::{
    Theme,
    theme::{DARK_SCHEME_QUERY, THEME_ATTRIBUTE},
};
use wasm_bindgen::JsCast;
use web_sys::MediaQueryListEvent;

use crate::{dom, error::Result, page::Page};

/// Apply and store the initial theme, then bind the toggle button.
pub fn init(page: &Page) -> Result<()> {
    let key = page.config.storage.theme_key.clone();
    let root = page.root()?;

    let media = page.window.match_media(DARK_SCHEME_QUERY)?;
    let system_dark = media.as_ref().is_some_and(|m| m.matches());
    let saved = page.storage_get(&key);
    let theme = Theme::resolve(
        saved.as_deref(),
        root.get_attribute(THEME_ATTRIBUTE).as_deref(),
        system_dark,
    );
    if let Err(err) = set_theme(page, theme) {
        log::warn!("initial theme not saved: {err}");
    }

    // Follow the system scheme while no theme is stored
    if let Some(media) = media {
        let page = page.clone();
        dom::listen(&media, "change", move |event| {
            if page.storage_get(&key).is_some() {
                return;
            }
            let Some(event) = event.dyn_ref::<MediaQueryListEvent>() else {
                return;
            };
            if let Err(err) = set_theme(&page, Theme::from_system(event.matches())) {
                log::warn!("failed to follow system theme: {err}");
            }
        })?;
    }

    if let Some(button) = page.by_id("theme-toggle") {
        let page = page.clone();
        dom::listen(&button, "click", move |_| {
            if let Err(err) = toggle(&page) {
                log::warn!("theme toggle failed: {err}");
            }
        })?;
    }

    Ok(())
}

/// Switch to the other theme and remember the choice.
pub fn toggle(page: &Page) -> Result<Theme> {
    let root = page.root()?;
    let theme = Theme::toggle_from(root.get_attribute(THEME_ATTRIBUTE).as_deref());
    set_theme(page, theme)?;
    Ok(theme)
}

/// Apply a theme and persist it.
pub fn set_theme(page: &Page, theme: Theme) -> Result<()> {
    page.root()?.set_attribute(THEME_ATTRIBUTE, theme.as_str())?;
    page.storage_set(&page.config.storage.theme_key, theme.as_str())?;
    log::debug!("theme set to {theme}");
    Ok(())
}
