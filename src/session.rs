use crate::storage::KeyValueStore;
use crate::user::{UserRecord, UserStore};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The user logged out; session-scoped state returns to its initial value.
    Reset,
}

/// State that lives for one login session and reacts to [`SessionEvent`]s.
pub trait SessionScoped {
    fn on_session_event(&mut self, event: SessionEvent);
}

type Listener = Box<dyn Fn(SessionEvent) + Send + Sync>;

/// Fans session events out to every registered container, so the logout flow
/// never has to know which containers exist.
#[derive(Default)]
pub struct SessionBus {
    listeners: Vec<Listener>,
}

impl SessionBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl Fn(SessionEvent) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn register<T>(&mut self, container: Arc<Mutex<T>>)
    where
        T: SessionScoped + Send + 'static,
    {
        self.subscribe(move |event| match container.lock() {
            Ok(mut container) => container.on_session_event(event),
            Err(_) => tracing::warn!(?event, "skipping poisoned session container"),
        });
    }

    pub fn broadcast(&self, event: SessionEvent) {
        tracing::debug!(?event, listeners = self.listeners.len(), "broadcasting");
        for listener in &self.listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// The tab-lifetime owner of the current [`UserRecord`].
///
/// `None` means nobody is signed in. That state comes from an explicit logout,
/// or from a slot holding the signed-out marker. A fresh session starts from
/// [`UserStore::load`], which yields a record even for an empty store.
pub struct UserSession<S: KeyValueStore> {
    store: UserStore<S>,
    current: Option<UserRecord>,
}

impl<S: KeyValueStore> UserSession<S> {
    pub fn load(storage: S) -> Self {
        let store = UserStore::new(storage);
        let current = store.load();
        Self { store, current }
    }

    pub fn get(&self) -> Option<&UserRecord> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn store(&self) -> &UserStore<S> {
        &self.store
    }

    pub fn storage(&self) -> &S {
        self.store.storage()
    }

    /// Replaces the current value.
    ///
    /// A record that differs from the current one is written through to the
    /// store. Clearing to `None` leaves storage alone; removing the slot is
    /// [`UserStore::clear`]'s job.
    pub fn set(&mut self, record: impl Into<Option<UserRecord>>) {
        let record = record.into();
        if record == self.current {
            return;
        }

        if let Some(record) = &record
            && let Err(e) = self.store.save(record)
        {
            tracing::warn!(error = %e, "user record kept in memory only");
        }

        self.current = record;
    }

    /// Applies a partial edit to a copy of the current record and commits it.
    /// Does nothing while signed out.
    pub fn modify(&mut self, edit: impl FnOnce(&mut UserRecord)) {
        let Some(mut record) = self.current.clone() else {
            return;
        };
        edit(&mut record);
        self.set(record);
    }
}
