//! `window.localStorage` behind [`KeyValueStorage`].

use lib_core::error::{CoreError, Result};
use lib_core::storage::KeyValueStorage;
use wasm_bindgen::JsValue;

/// Looks the storage object up on every call, so the handle itself stays
/// `Send + Sync` for Leptos context.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage(&self) -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| CoreError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| CoreError::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> CoreError {
    CoreError::Storage(format!("{:?}", err))
}
