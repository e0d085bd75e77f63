//! Application Errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Local storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Failed to write '{key}' to storage: {reason}")]
    StorageWrite { key: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Canvas error: {0}")]
    Canvas(String),

    #[error("Invalid image data: {0}")]
    InvalidImage(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Best-effort message from a thrown JS value (DOMException, Error, string)
pub fn js_error_message(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
