//! Key-Value Storage
//!
//! String storage behind a trait so repositories can run against
//! `window.localStorage` in the browser and an in-memory map in tests.

use crate::error::{js_error_message, AppError, Result};

/// Synchronous string storage keyed by name
pub trait KeyValueStore {
    /// `Ok(None)` when the key has never been written
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// `window.localStorage`, looked up on every call.
/// A missing or disabled storage area surfaces as an error from the call itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| AppError::StorageUnavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| AppError::StorageUnavailable(js_error_message(&e)))?
            .ok_or_else(|| AppError::StorageUnavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| AppError::StorageUnavailable(js_error_message(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| AppError::StorageWrite {
                key: key.to_string(),
                reason: js_error_message(&e),
            })
    }
}
