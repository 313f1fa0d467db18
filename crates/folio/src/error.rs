use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("missing {role} element (`{selector}`)")]
    MissingElement {
        role: &'static str,
        selector: String,
    },
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for FolioError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|error| String::from(error.message()))
            })
            .unwrap_or_else(|| format!("{value:?}"));
        FolioError::Js(message)
    }
}

pub type Result<T, E = FolioError> = std::result::Result<T, E>;
