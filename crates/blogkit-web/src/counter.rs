//! Visitor counters: per-browser localStorage count and the remote hit API.

use blogkit_core::counter::{HitResponse, hit_key, hit_url, next_count, visitor_key};
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::{
    error::{Result, WebError},
    page::Page,
};

/// Elements showing the remote hit count.
const REMOTE_SELECTOR: &str = ".js-visitor-count";

/// Count this visit in localStorage and show it in `#visitor-count`.
pub fn init_local(page: &Page) -> Result<()> {
    let Some(element) = page.by_id("visitor-count") else {
        return Ok(());
    };

    let key = visitor_key(&page.config.storage.visitor_prefix, &page.pathname()?);
    let count = next_count(page.storage_get(&key).as_deref()).to_string();

    if let Err(err) = page.storage_set(&key, &count) {
        log::warn!("visitor count not saved: {err}");
    }
    element.set_text_content(Some(&count));

    Ok(())
}

/// Register a hit with the counter API and show the total.
///
/// Failures are logged and leave the placeholder text in place.
pub fn init_remote(page: &Page) -> Result<()> {
    let counter = &page.config.counter;
    if !counter.remote_enabled {
        return Ok(());
    }

    let elements = page.query_all(REMOTE_SELECTOR)?;
    if elements.is_empty() {
        return Ok(());
    }

    let url = hit_url(&counter.api_base, &counter.namespace, &hit_key(&page.pathname()?));
    spawn_local(async move {
        match fetch_hits(&url).await {
            Ok(Some(text)) => show(&elements, &text),
            Ok(None) => log::debug!("counter API returned no numeric value"),
            Err(err) => log::debug!("counter API unavailable: {err}"),
        }
    });

    Ok(())
}

async fn fetch_hits(url: &str) -> Result<Option<String>> {
    let response = Request::get(url).send().await?;

    if !response.ok() {
        return Err(WebError::Http(response.status()));
    }

    let body: HitResponse = response.json().await?;
    Ok(body.display())
}

fn show(elements: &[Element], text: &str) {
    for element in elements {
        element.set_text_content(Some(text));
    }
}
