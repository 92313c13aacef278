//! Typed localStorage preference helpers.

use serde::{de::DeserializeOwned, Serialize};

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Loads a typed preference value from localStorage.
///
/// Returns `None` when the key is absent, localStorage is unavailable, or
/// deserialization fails.
pub fn load_local_pref<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(target_arch = "wasm32")]
    {
        let raw = local_storage()?.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

/// Saves a typed preference value to localStorage.
///
/// # Errors
///
/// Returns an error when localStorage is unavailable or serialization or
/// storage fails.
pub fn save_local_pref<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = local_storage().ok_or_else(|| "localStorage unavailable".to_string())?;
        let raw = serde_json::to_string(value).map_err(|err| err.to_string())?;
        storage
            .set_item(key, &raw)
            .map_err(|_| format!("localStorage write failed for `{key}`"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (key, value);
        Ok(())
    }
}
