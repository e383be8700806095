//! Cloud key/value store emulated over the page's durable storage.
//!
//! Entries live under a namespace prefix; [`CloudStorage::get_keys`] lists only that namespace,
//! with the prefix stripped. Every operation returns a deferred result that always resolves:
//! storage failures are logged and reported as `false`/absent rather than as errors.

use std::{collections::BTreeMap, rc::Rc};

use bridge_host::KeyValueStore;

use crate::BridgeFuture;

/// Default namespace prefix for cloud-store entries.
pub const CLOUD_STORAGE_PREFIX: &str = "tg_storage_";

/// Cloud store handle. Clones share the same backing storage.
#[derive(Clone)]
pub struct CloudStorage {
    store: Rc<dyn KeyValueStore>,
    prefix: Rc<str>,
}

impl CloudStorage {
    /// Wraps `store`, namespacing every key under `prefix`.
    pub fn new(store: Rc<dyn KeyValueStore>, prefix: &str) -> Self {
        Self {
            store,
            prefix: Rc::from(prefix),
        }
    }

    fn namespaced(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }

    fn read(&self, key: &str) -> Option<String> {
        self.store
            .get_item(&self.namespaced(key))
            .unwrap_or_else(|err| {
                log::warn!("CloudStorage: get item {key} failed: {err}");
                None
            })
    }

    fn delete(&self, key: &str) -> bool {
        match self.store.remove_item(&self.namespaced(key)) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("CloudStorage: remove item {key} failed: {err}");
                false
            }
        }
    }

    /// Stores `value` under `key`. Resolves whether the write succeeded.
    pub fn set_item<'a>(&'a self, key: &'a str, value: &'a str) -> BridgeFuture<'a, bool> {
        Box::pin(async move {
            match self.store.set_item(&self.namespaced(key), value) {
                Ok(()) => {
                    log::info!("CloudStorage: Set item {key} = {value}");
                    true
                }
                Err(err) => {
                    log::warn!("CloudStorage: set item {key} failed: {err}");
                    false
                }
            }
        })
    }

    /// Reads `key`. A missing key resolves to `None`.
    pub fn get_item<'a>(&'a self, key: &'a str) -> BridgeFuture<'a, Option<String>> {
        Box::pin(async move {
            let value = self.read(key);
            log::info!("CloudStorage: Get item {key} = {value:?}");
            value
        })
    }

    /// Reads several keys at once; every requested key appears in the result.
    pub fn get_items<'a>(
        &'a self,
        keys: &'a [&'a str],
    ) -> BridgeFuture<'a, BTreeMap<String, Option<String>>> {
        Box::pin(async move {
            let values: BTreeMap<_, _> = keys
                .iter()
                .map(|key| (key.to_string(), self.read(key)))
                .collect();
            log::info!("CloudStorage: Get items {values:?}");
            values
        })
    }

    /// Removes `key`. Resolves whether the removal succeeded; a missing key counts as success.
    pub fn remove_item<'a>(&'a self, key: &'a str) -> BridgeFuture<'a, bool> {
        Box::pin(async move {
            let removed = self.delete(key);
            log::info!("CloudStorage: Removed item {key}");
            removed
        })
    }

    /// Removes several keys. Resolves `true` only if every removal succeeded.
    pub fn remove_items<'a>(&'a self, keys: &'a [&'a str]) -> BridgeFuture<'a, bool> {
        Box::pin(async move {
            let all_removed = keys
                .iter()
                .fold(true, |ok, key| self.delete(key) && ok);
            log::info!("CloudStorage: Removed items {keys:?}");
            all_removed
        })
    }

    /// Lists keys in this store's namespace, prefix stripped, in storage order.
    pub fn get_keys(&self) -> BridgeFuture<'_, Vec<String>> {
        Box::pin(async move {
            let keys: Vec<String> = self
                .store
                .keys()
                .unwrap_or_else(|err| {
                    log::warn!("CloudStorage: listing keys failed: {err}");
                    Vec::new()
                })
                .into_iter()
                .filter_map(|key| key.strip_prefix(&*self.prefix).map(str::to_string))
                .collect();
            log::info!("CloudStorage: Get keys {keys:?}");
            keys
        })
    }
}

#[cfg(test)]
mod tests {
    use bridge_host::MemoryKeyValueStore;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, String> {
            Err("storage disabled".to_string())
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), String> {
            Err("quota exceeded".to_string())
        }

        fn remove_item(&self, _key: &str) -> Result<(), String> {
            Err("storage disabled".to_string())
        }

        fn keys(&self) -> Result<Vec<String>, String> {
            Err("storage disabled".to_string())
        }
    }

    fn cloud() -> (CloudStorage, MemoryKeyValueStore) {
        let store = MemoryKeyValueStore::default();
        (
            CloudStorage::new(Rc::new(store.clone()), CLOUD_STORAGE_PREFIX),
            store,
        )
    }

    #[test]
    fn entries_are_written_under_the_namespace() {
        let (cloud, store) = cloud();
        assert!(block_on(cloud.set_item("greeting", "hi")));
        assert_eq!(
            store.get_item("tg_storage_greeting").expect("get"),
            Some("hi".to_string())
        );
        assert_eq!(store.get_item("greeting").expect("get"), None);
    }

    #[test]
    fn get_items_reports_every_requested_key() {
        let (cloud, _) = cloud();
        block_on(cloud.set_item("a", "1"));

        let values = block_on(cloud.get_items(&["a", "missing"]));
        assert_eq!(
            values,
            BTreeMap::from([
                ("a".to_string(), Some("1".to_string())),
                ("missing".to_string(), None),
            ])
        );
    }

    #[test]
    fn remove_items_clears_each_key() {
        let (cloud, _) = cloud();
        block_on(cloud.set_item("a", "1"));
        block_on(cloud.set_item("b", "2"));
        block_on(cloud.set_item("c", "3"));

        assert!(block_on(cloud.remove_items(&["a", "c", "never-set"])));
        assert_eq!(block_on(cloud.get_keys()), vec!["b".to_string()]);
    }

    #[test]
    fn keys_outside_the_namespace_are_not_listed() {
        let (cloud, store) = cloud();
        store.set_item("savedText", "draft").expect("set");
        store.set_item("tg_storagex", "near miss").expect("set");
        block_on(cloud.set_item("k", "v"));

        assert_eq!(block_on(cloud.get_keys()), vec!["k".to_string()]);
    }

    #[test]
    fn storage_failures_resolve_instead_of_failing() {
        let cloud = CloudStorage::new(Rc::new(BrokenStore), CLOUD_STORAGE_PREFIX);
        assert!(!block_on(cloud.set_item("k", "v")));
        assert_eq!(block_on(cloud.get_item("k")), None);
        assert!(!block_on(cloud.remove_item("k")));
        assert!(!block_on(cloud.remove_items(&["k", "j"])));
        assert!(block_on(cloud.get_keys()).is_empty());
    }

    #[test]
    fn custom_prefix_is_respected() {
        let store = MemoryKeyValueStore::default();
        let cloud = CloudStorage::new(Rc::new(store.clone()), "demo:");
        block_on(cloud.set_item("k", "v"));
        assert_eq!(store.keys().expect("keys"), vec!["demo:k".to_string()]);
        assert_eq!(block_on(cloud.get_keys()), vec!["k".to_string()]);
    }
}
