//! Page Errors
//!
//! Failures while wiring the controller onto the markup. Runtime
//! handler failures (clipboard, validation) are values, not errors.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("window.document is not available")]
    NoDocument,

    #[error("required element `{selector}` not found")]
    MissingElement { selector: String },

    #[error("element `{selector}` is not a {expected}")]
    WrongElementType {
        selector: String,
        expected: &'static str,
    },

    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        PageError::Js(message)
    }
}
