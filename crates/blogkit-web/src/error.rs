//! Error types for the browser runtime.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Result type alias using `WebError`.
pub type Result<T> = std::result::Result<T, WebError>;

/// Errors raised while wiring page behaviours.
#[derive(Error, Debug)]
pub enum WebError {
    /// No global `window` (not running in a browser page).
    #[error("no global window")]
    NoWindow,

    /// The window has no document.
    #[error("window has no document")]
    NoDocument,

    /// An element the page always has is missing.
    #[error("missing element: {0}")]
    MissingElement(&'static str),

    /// localStorage is disabled or unavailable.
    #[error("localStorage is unavailable")]
    StorageUnavailable,

    /// A DOM or JavaScript call threw.
    #[error("JavaScript error: {0}")]
    Js(String),

    /// Non-success HTTP status.
    #[error("HTTP error: {0}")]
    Http(u16),

    /// Network or response decoding error.
    #[error("Network error: {0}")]
    Net(#[from] gloo_net::Error),
}

impl WebError {
    /// Wrap a thrown JavaScript value.
    pub fn js(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|err| String::from(err.message()))
            })
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js(message)
    }

    /// Create a new JavaScript error from a message.
    pub fn js_message(message: impl Into<String>) -> Self {
        Self::Js(message.into())
    }
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::js(value)
    }
}
