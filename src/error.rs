//! Errors raised while wiring page affordances.
//!
//! None of these reach the user. The bootstrapper logs them and moves on, so
//! a page without some piece of markup simply lacks that behavior.

/// Why a setup routine did not install its handlers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// No global `window` (not running in a browser).
    #[error("no window object")]
    NoWindow,
    /// The window has no document.
    #[error("no document object")]
    NoDocument,
    /// A required element id or selector matched nothing.
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    /// A browser API call was rejected.
    #[error("browser call failed: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for SetupError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}
