//! Browser localStorage adapter for the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The core `SessionStore` keeps the token, refresh token and user under
//! fixed keys; this type is where they physically land in the browser.
//! Native builds have no localStorage and report every access as
//! `Unavailable`, which the session treats as "nothing stored".

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use ptas::error::StorageError;
use ptas::storage::KeyValueStore;

const NO_STORAGE: &str = "localStorage is not available";

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| StorageError::Unavailable(NO_STORAGE.to_owned()))
}

#[cfg(feature = "csr")]
fn js_error(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Unavailable(js_error(&e)))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable(NO_STORAGE.to_owned()))
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write(js_error(&e)))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable(NO_STORAGE.to_owned()))
        }
    }

    fn remove_all(&self, keys: &[&str]) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage()?;
            for key in keys {
                storage.remove_item(key).map_err(|e| StorageError::Write(js_error(&e)))?;
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = keys;
            Err(StorageError::Unavailable(NO_STORAGE.to_owned()))
        }
    }
}
