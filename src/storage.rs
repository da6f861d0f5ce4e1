use crate::known_errors::ProfileResult;
use dashmap::DashMap;
use std::sync::Arc;

/// Slot holding the JSON-encoded [`crate::user::UserRecord`].
pub const USER_KEY: &str = "user";

/// Slot holding the JSON-encoded work-item collection.
pub const WORK_ITEMS_KEY: &str = "work-items";

/// A durable string key-value store, shaped after `window.localStorage`.
///
/// All operations are synchronous. Implementations are cheap handles: cloning
/// one yields another view of the same underlying slots.
pub trait KeyValueStore: Clone + Send + Sync + 'static {
    /// Returns the value stored under `key`, or `None` if the slot is empty.
    fn get(&self, key: &str) -> ProfileResult<Option<String>>;

    /// Writes `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> ProfileResult<()>;

    /// Removes the slot entirely. Removing an empty slot is not an error.
    fn remove(&self, key: &str) -> ProfileResult<()>;
}

/// In-process storage backed by a shared map
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<DashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> ProfileResult<Option<String>> {
        Ok(self.slots.get(key).map(|value| value.clone()))
    }

    fn set(&self, key: &str, value: &str) -> ProfileResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ProfileResult<()> {
        self.slots.remove(key);
        Ok(())
    }
}

#[cfg(feature = "csr")]
pub use browser::BrowserStorage;

#[cfg(feature = "csr")]
mod browser {
    use super::KeyValueStore;
    use crate::known_errors::{KnownErrors, ProfileResult};

    /// `window.localStorage`, looked up on every call so the handle stays `Send`.
    #[derive(Clone, Copy, Default)]
    pub struct BrowserStorage;

    impl BrowserStorage {
        fn local_storage() -> ProfileResult<web_sys::Storage> {
            web_sys::window()
                .and_then(|window| window.local_storage().ok().flatten())
                .ok_or(KnownErrors::StorageUnavailable)
        }
    }

    impl KeyValueStore for BrowserStorage {
        fn get(&self, key: &str) -> ProfileResult<Option<String>> {
            Self::local_storage()?
                .get_item(key)
                .map_err(|_| KnownErrors::StorageRead {
                    key: key.to_string(),
                })
        }

        fn set(&self, key: &str, value: &str) -> ProfileResult<()> {
            // quota errors surface here
            Self::local_storage()?
                .set_item(key, value)
                .map_err(|_| KnownErrors::StorageWrite {
                    key: key.to_string(),
                })
        }

        fn remove(&self, key: &str) -> ProfileResult<()> {
            Self::local_storage()?
                .remove_item(key)
                .map_err(|_| KnownErrors::StorageWrite {
                    key: key.to_string(),
                })
        }
    }
}

/// The storage the application shell runs against.
#[cfg(feature = "csr")]
pub type AppStorage = BrowserStorage;

/// The storage the application shell runs against.
#[cfg(not(feature = "csr"))]
pub type AppStorage = MemoryStorage;
