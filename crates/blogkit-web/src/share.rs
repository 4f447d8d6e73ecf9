//! Share buttons: copy link and Twitter.

use blogkit_core::share::twitter_intent_url;
use wasm_bindgen::{JsCast, prelude::*};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{HtmlDocument, HtmlTextAreaElement};

use crate::{
    dom,
    error::{Result, WebError},
    page::Page,
    toast,
};

/// Bind `#share-copy` and `#share-twitter`.
pub fn init(page: &Page) -> Result<()> {
    if let Some(button) = page.by_id("share-copy") {
        let page = page.clone();
        dom::listen(&button, "click", move |_| {
            let page = page.clone();
            spawn_local(async move {
                if let Err(err) = copy_link(&page).await {
                    log::warn!("copy link failed: {err}");
                }
            });
        })?;
    }

    if let Some(button) = page.by_id("share-twitter") {
        let page = page.clone();
        dom::listen(&button, "click", move |event| {
            event.prevent_default();
            if let Err(err) = share_twitter(&page) {
                log::warn!("twitter share failed: {err}");
            }
        })?;
    }

    Ok(())
}

/// Copy the page URL and confirm with a toast.
pub async fn copy_link(page: &Page) -> Result<()> {
    let href = page.href()?;

    if let Err(err) = write_clipboard(page, &href).await {
        log::debug!("clipboard API failed ({err}); using execCommand fallback");
        copy_with_textarea(page, &href)?;
    }

    toast::show(page, &page.config.share.toast_message)
}

/// Open the tweet intent for this page in a popup.
pub fn share_twitter(page: &Page) -> Result<()> {
    let share = &page.config.share;
    let url = twitter_intent_url(&share.twitter_intent_url, &page.document.title(), &page.href()?);
    page.window
        .open_with_url_and_target_and_features(&url, "_blank", &share.popup_features)?;
    Ok(())
}

/// `navigator.clipboard.writeText`, which is absent outside secure contexts.
async fn write_clipboard(page: &Page, text: &str) -> Result<()> {
    let navigator = page.window.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(WebError::js_message("navigator.clipboard is unavailable"));
    }

    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| WebError::js_message("clipboard.writeText is not a function"))?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| WebError::js_message("clipboard.writeText did not return a promise"))?;

    JsFuture::from(promise).await?;
    Ok(())
}

/// Legacy copy through a temporary textarea and `execCommand("copy")`.
fn copy_with_textarea(page: &Page, text: &str) -> Result<()> {
    let body = page.body()?;
    let textarea: HtmlTextAreaElement = dom::create(&page.document, "textarea")?;
    textarea.set_value(text);
    body.append_child(&textarea)?;
    textarea.select();

    let copied = match page.document.dyn_ref::<HtmlDocument>() {
        Some(document) => document.exec_command("copy").map_err(WebError::js),
        None => Err(WebError::js_message("document does not support execCommand")),
    };

    body.remove_child(&textarea)?;
    copied.map(|_| ())
}
