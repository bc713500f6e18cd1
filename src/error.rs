//! Error types for browser-side operations.
//!
//! - [`DomError`] - Document access and element construction failures
//! - [`LibraryError`] - Calls into the external effect libraries

use thiserror::Error;
use wasm_bindgen::JsValue;

/// DOM access errors.
#[derive(Debug, Clone, Error)]
pub enum DomError {
    /// Browser window or document not available
    #[error("document not available")]
    NoDocument,
    /// `<body>` not present yet
    #[error("document body not available")]
    NoBody,
    /// A DOM call threw
    #[error("DOM operation failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(describe(&value))
    }
}

/// Errors from the script-tag libraries (smooth scroll, reveal, typing, ...).
#[derive(Debug, Clone, Error)]
pub enum LibraryError {
    /// The library global is not defined on `window`.
    #[error("{0} is not loaded")]
    Missing(&'static str),
    /// A library call threw or returned something unusable.
    #[error("{name} failed: {message}")]
    Call { name: String, message: String },
    /// An option record could not be converted to a JS object.
    #[error("invalid options: {0}")]
    Options(String),
    #[error(transparent)]
    Dom(#[from] DomError),
}

impl LibraryError {
    pub fn call(name: impl Into<String>, error: &JsValue) -> Self {
        Self::Call {
            name: name.into(),
            message: describe(error),
        }
    }
}

impl From<serde_wasm_bindgen::Error> for LibraryError {
    fn from(error: serde_wasm_bindgen::Error) -> Self {
        Self::Options(error.to_string())
    }
}

/// Best-effort message for a thrown JS value.
fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &"message".into())
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
