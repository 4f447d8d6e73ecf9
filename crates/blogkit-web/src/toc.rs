//! Auto-generated table of contents with scroll-spy.

use std::rc::Rc;

use blogkit_core::toc::{
    ACTIVE_CLASS, HEADING_SELECTOR, HIDDEN_CLASS, HeadingLevel, TocEntry, VisibilityWindow,
    WRAPPER_SELECTOR, slugify,
};
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::{dom, error::Result, page::Page};

/// Build the table of contents into `#toc-list`.
pub fn init(page: &Page) -> Result<()> {
    let Some(list) = page.by_id("toc-list") else {
        return Ok(());
    };
    let Some(article) = page.article()? else {
        return Ok(());
    };

    let headings = dom::elements(&article.query_selector_all(HEADING_SELECTOR)?);
    let wrapper = list.closest(WRAPPER_SELECTOR)?;

    if headings.is_empty() {
        if let Some(wrapper) = wrapper.as_ref().and_then(|w| w.dyn_ref::<HtmlElement>()) {
            wrapper.style().set_property("display", "none")?;
        }
        return Ok(());
    }

    let fragment = page.document.create_document_fragment();
    for (index, heading) in headings.iter().enumerate() {
        let entry = entry_for(heading, index);
        let item = page.document.create_element("li")?;
        let link = page.document.create_element("a")?;
        link.set_attribute("href", &entry.href())?;
        link.set_text_content(Some(&entry.text));
        link.set_class_name(entry.level.link_class());

        let heading = heading.clone();
        let window = page.window.clone();
        let href = entry.href();
        dom::listen(&link, "click", move |event| {
            event.prevent_default();
            heading.scroll_into_view_with_scroll_into_view_options(&dom::smooth_to_start());
            let pushed = window
                .history()
                .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&href)));
            if let Err(err) = pushed {
                log::warn!("failed to record {href} in history: {err:?}");
            }
        })?;

        item.append_child(&link)?;
        fragment.append_child(&item)?;
    }
    list.append_child(&fragment)?;
    log::debug!("table of contents built with {} entries", headings.len());

    setup_scroll_spy(page, &headings, &list)?;

    if let Some(wrapper) = wrapper {
        setup_visibility_window(page, wrapper)?;
    }

    Ok(())
}

/// Describe a heading, assigning it an id when it has none.
fn entry_for(heading: &Element, index: usize) -> TocEntry {
    let text = heading.text_content().unwrap_or_default();
    if heading.id().is_empty() {
        heading.set_id(&slugify(&text, index));
    }
    let level = HeadingLevel::from_tag(&heading.tag_name()).unwrap_or(HeadingLevel::H2);
    TocEntry::new(level, text, heading.id())
}

/// Highlight the link of the heading entering the reading zone.
fn setup_scroll_spy(page: &Page, headings: &[Element], list: &Element) -> Result<()> {
    let links = dom::elements(&list.query_selector_all("a")?);

    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }

            for link in &links {
                let _ = link.class_list().remove_1(ACTIVE_CLASS);
            }

            let href = format!("#{}", entry.target().id());
            let active = links
                .iter()
                .find(|link| link.get_attribute("href").as_deref() == Some(href.as_str()));
            if let Some(active) = active {
                let _ = active.class_list().add_1(ACTIVE_CLASS);
                // Keep the active link visible inside the floating TOC card
                active.scroll_into_view_with_scroll_into_view_options(&dom::nearest());
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&page.config.toc.root_margin);
    options.set_threshold(&JsValue::from_f64(0.0));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for heading in headings {
        observer.observe(heading);
    }

    Ok(())
}

/// Show the TOC only while scrolling between the configured sections.
fn setup_visibility_window(page: &Page, wrapper: Element) -> Result<()> {
    let toc = &page.config.toc;
    let (Some(start), Some(end)) = (
        page.by_id_as::<HtmlElement>(&toc.window_start_id),
        page.by_id_as::<HtmlElement>(&toc.window_end_id),
    ) else {
        return Ok(());
    };

    let window = page.window.clone();
    let lead = toc.window_lead;
    let update = Rc::new(move || {
        let scroll_y = window.scroll_y().unwrap_or_default();
        let visible = VisibilityWindow::new(
            f64::from(start.offset_top()),
            lead,
            f64::from(end.offset_top()),
            f64::from(end.offset_height()),
        );
        let classes = wrapper.class_list();
        let _ = if visible.contains(scroll_y) {
            classes.remove_1(HIDDEN_CLASS)
        } else {
            classes.add_1(HIDDEN_CLASS)
        };
    });

    update();
    for event in ["scroll", "resize"] {
        let update = Rc::clone(&update);
        dom::listen(&page.window, event, move |_| update())?;
    }

    Ok(())
}
