//! Browser `localStorage` as a [`PreferenceStorage`]

use wasm_bindgen::JsValue;

use crate::error::{Error, Result};
use crate::storage::PreferenceStorage;

/// `window.localStorage`, looked up on every access
///
/// Private browsing modes may refuse access; that surfaces as an error the
/// preference holder turns into the default language.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn storage() -> Result<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| Error::Storage {
            message: "no window".to_string(),
        })?
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| Error::Storage {
            message: "localStorage unavailable".to_string(),
        })
}

pub(crate) fn js_error(value: JsValue) -> Error {
    Error::Storage {
        message: value.as_string().unwrap_or_else(|| format!("{value:?}")),
    }
}

impl PreferenceStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        storage()?.set_item(key, value).map_err(js_error)
    }
}
