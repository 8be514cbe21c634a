use canvas::engine::EngineError;
use wasm_bindgen::JsValue;

/// Errors raised while mounting the viewer into the page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    /// A DOM call failed or returned an element of the wrong type.
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}
