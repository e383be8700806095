//! `localStorage`-backed key/value store implementation.
//!
//! `localStorage` is synchronous, so this adapter implements [`bridge_host::KeyValueStore`]
//! directly without an async wrapper.

use bridge_host::KeyValueStore;

#[derive(Debug, Clone, Copy, Default)]
/// Browser key/value store backed by `window.localStorage`.
pub struct WebLocalStorage;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| "localStorage unavailable".to_string())
}

impl KeyValueStore for WebLocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| format!("localStorage get_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| format!("localStorage set_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| format!("localStorage remove_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(())
        }
    }

    fn keys(&self) -> Result<Vec<String>, String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = local_storage()?;
            let len = storage
                .length()
                .map_err(|e| format!("localStorage length failed: {e:?}"))?;
            let mut keys = Vec::with_capacity(len as usize);
            for index in 0..len {
                if let Some(key) = storage
                    .key(index)
                    .map_err(|e| format!("localStorage key failed: {e:?}"))?
                {
                    keys.push(key);
                }
            }
            Ok(keys)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_fallback_is_empty_and_accepts_writes() {
        let store = WebLocalStorage;
        store.set_item("tg_storage_a", "1").expect("set");
        assert_eq!(store.get_item("tg_storage_a").expect("get"), None);
        assert!(store.keys().expect("keys").is_empty());
        store.remove_item("tg_storage_a").expect("remove");
    }
}
