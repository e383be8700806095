//! Synchronous key/value storage contracts and adapters.
//!
//! The page's durable storage (`localStorage` in browsers) is synchronous at its API boundary, so
//! this contract is too. Callers that need an asynchronous surface wrap it themselves.

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

/// Host service for the page's durable string key/value storage.
pub trait KeyValueStore {
    /// Reads the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is unavailable.
    fn get_item(&self, key: &str) -> Result<Option<String>, String>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is unavailable or rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;

    /// Removes `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is unavailable.
    fn remove_item(&self, key: &str) -> Result<(), String>;

    /// Enumerates every key currently held by the storage, in storage order.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is unavailable.
    fn keys(&self) -> Result<Vec<String>, String>;
}

#[derive(Debug, Clone, Default)]
/// In-memory storage keyed by string. Clones share the same entries.
pub struct MemoryKeyValueStore {
    inner: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryKeyValueStore {
    /// Returns the number of stored entries across every namespace.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns whether the storage holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, String> {
        Ok(self.inner.borrow().keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip_and_remove() {
        let store = MemoryKeyValueStore::default();
        let store_obj: &dyn KeyValueStore = &store;

        store_obj.set_item("savedText", "hello").expect("set");
        assert_eq!(
            store_obj.get_item("savedText").expect("get"),
            Some("hello".to_string())
        );
        store_obj.remove_item("savedText").expect("remove");
        assert_eq!(store_obj.get_item("savedText").expect("get"), None);
        store_obj.remove_item("savedText").expect("remove missing");
    }

    #[test]
    fn memory_store_clones_share_entries() {
        let store = MemoryKeyValueStore::default();
        let other = store.clone();
        store.set_item("b", "2").expect("set");
        other.set_item("a", "1").expect("set");

        assert_eq!(store.keys().expect("keys"), vec!["a", "b"]);
        assert_eq!(other.len(), 2);
    }
}
