//! Handle on the current page: window, document, storage and configuration.

use std::rc::Rc;

use blogkit_core::Config;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Storage, Window};

use crate::{
    dom,
    error::{Result, WebError},
};

/// Id of the optional inline JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "blogkit-config";

/// Everything a page behaviour needs. Cheap to clone into event handlers.
#[derive(Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub config: Rc<Config>,
    storage: Option<Storage>,
}

impl Page {
    /// Attach to the current browser page.
    pub fn load() -> Result<Self> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoDocument)?;
        let config = load_config(&document);

        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("localStorage unavailable; preferences and counts will not persist");
        }

        Ok(Self {
            window,
            document,
            config: Rc::new(config),
            storage,
        })
    }

    /// Element by id.
    pub fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    /// Element by id, cast to a concrete element type.
    pub fn by_id_as<T: JsCast>(&self, id: &str) -> Option<T> {
        self.by_id(id).and_then(|el| el.dyn_into::<T>().ok())
    }

    /// All elements matching a selector.
    pub fn query_all(&self, selector: &str) -> Result<Vec<Element>> {
        Ok(dom::elements(&self.document.query_selector_all(selector)?))
    }

    /// The first `<article>` on the page.
    pub fn article(&self) -> Result<Option<Element>> {
        Ok(self.document.query_selector("article")?)
    }

    /// The `<html>` element.
    pub fn root(&self) -> Result<Element> {
        self.document
            .document_element()
            .ok_or(WebError::MissingElement("html"))
    }

    /// The `<body>` element.
    pub fn body(&self) -> Result<HtmlElement> {
        self.document.body().ok_or(WebError::MissingElement("body"))
    }

    /// Full URL of the page.
    pub fn href(&self) -> Result<String> {
        Ok(self.window.location().href()?)
    }

    /// Path component of the page URL.
    pub fn pathname(&self) -> Result<String> {
        Ok(self.window.location().pathname()?)
    }

    /// Hostname of the page URL.
    pub fn hostname(&self) -> Result<String> {
        Ok(self.window.location().hostname()?)
    }

    /// Read a raw localStorage value.
    pub fn storage_get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    /// Write a raw localStorage value.
    pub fn storage_set(&self, key: &str, value: &str) -> Result<()> {
        let storage = self.storage.as_ref().ok_or(WebError::StorageUnavailable)?;
        storage.set_item(key, value)?;
        Ok(())
    }
}

/// Read the inline page configuration, falling back to defaults.
fn load_config(document: &Document) -> Config {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return Config::default();
    };

    match Config::from_json_str(&text) {
        Ok(config) => {
            log::debug!("loaded page configuration from #{CONFIG_ELEMENT_ID}");
            config
        }
        Err(err) => {
            log::error!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            Config::default()
        }
    }
}
