//! blogkit browser runtime
//!
//! WebAssembly module loaded by every page of the blog. Each behaviour binds
//! to fixed element ids in the page markup and quietly does nothing when its
//! elements are absent.
//!
//! # Behaviours
//!
//! - [`theme`] - dark mode toggle with a persisted preference
//! - [`toc`] - generated table of contents, scroll-spy and visibility window
//! - [`share`] - copy link and Twitter share, confirmed by a [`toast`]
//! - [`progress`] - reading progress bar
//! - [`search`] - search modal (Cmd/Ctrl+K)
//! - [`counter`] - local and remote visitor counters
//! - [`mobile_toc`], [`links`], [`cards`] - small DOM conveniences
//!
//! # Usage
//!
//! ```html
//! <script type="module">
//!   import init from '/pkg/blogkit_web.js';
//!   init();
//! </script>
//! ```

pub mod cards;
pub mod counter;
pub mod dom;
pub mod error;
pub mod links;
pub mod mobile_toc;
pub mod page;
pub mod progress;
pub mod search;
pub mod share;
pub mod theme;
pub mod toast;
pub mod toc;

pub use error::{Result, WebError};
pub use page::Page;
use wasm_bindgen::prelude::*;

type Initializer = fn(&Page) -> Result<()>;

/// Page behaviours in start order.
const INITIALIZERS: [(&str, Initializer); 11] = [
    ("theme", theme::init),
    ("table of contents", toc::init),
    ("share buttons", share::init),
    ("reading progress", progress::init),
    ("search", search::init),
    ("remote visitor counter", counter::init_remote),
    ("mobile table of contents", mobile_toc::init),
    ("external links", links::init_external),
    ("lazy images", links::init_lazy_images),
    ("post cards", cards::init),
    ("visitor counter", counter::init_local),
];

/// Initialize the WASM module.
///
/// Sets up the panic hook and console logging, then enhances the page once
/// the DOM is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(err) = schedule() {
        log::error!("blogkit failed to start: {err}");
    }
}

fn schedule() -> Result<()> {
    let document = web_sys::window()
        .ok_or(WebError::NoWindow)?
        .document()
        .ok_or(WebError::NoDocument)?;

    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", |_| enhance())
    } else {
        enhance();
        Ok(())
    }
}

/// Run every page behaviour. A failing behaviour is logged and skipped.
pub fn enhance() {
    let page = match Page::load() {
        Ok(page) => page,
        Err(err) => {
            log::error!("blogkit cannot attach to the page: {err}");
            return;
        }
    };

    for (name, init) in INITIALIZERS {
        if let Err(err) = init(&page) {
            log::warn!("{name} disabled: {err}");
        }
    }
}

/// Get the version of the runtime.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
