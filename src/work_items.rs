use crate::known_errors::{KnownErrors, ProfileResult};
use crate::session::{SessionEvent, SessionScoped};
use crate::storage::{KeyValueStore, WORK_ITEMS_KEY};
use serde_json::Value;

/// The work-item collection kept next to the profile.
///
/// Items are opaque here; only the tracker pages look inside them.
pub struct WorkItems<S: KeyValueStore> {
    storage: S,
    items: Vec<Value>,
}

impl<S: KeyValueStore> WorkItems<S> {
    pub fn load(storage: S) -> Self {
        let items = match Self::read(&storage) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(error = %e, "starting with no work items");
                Vec::new()
            }
        };
        Self { storage, items }
    }

    fn read(storage: &S) -> ProfileResult<Vec<Value>> {
        match storage.get(WORK_ITEMS_KEY)? {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| KnownErrors::malformed(WORK_ITEMS_KEY, e))
            }
            None => Ok(Vec::new()),
        }
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn replace(&mut self, items: Vec<Value>) {
        self.items = items;
        let written = serde_json::to_string(&self.items)
            .map_err(|e| KnownErrors::encode(WORK_ITEMS_KEY, e))
            .and_then(|raw| self.storage.set(WORK_ITEMS_KEY, &raw));
        if let Err(e) = written {
            tracing::warn!(error = %e, "work items kept in memory only");
        }
    }
}

impl<S: KeyValueStore> SessionScoped for WorkItems<S> {
    fn on_session_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Reset => self.items.clear(),
        }
    }
}
