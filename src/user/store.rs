use super::UserRecord;
use crate::known_errors::{KnownErrors, ProfileResult};
use crate::storage::{KeyValueStore, USER_KEY};

/// What the `"user"` slot holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredUser {
    Empty,
    SignedOut,
    Present(UserRecord),
}

/// The durable mirror of the session's [`UserRecord`], kept in the `"user"` slot.
#[derive(Clone)]
pub struct UserStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> UserStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reads the stored record.
    ///
    /// An empty, unreadable or malformed slot yields [`UserRecord::default`].
    /// A slot holding a literal `null` is the signed-out marker older builds
    /// wrote on logout and yields `None`.
    pub fn load(&self) -> Option<UserRecord> {
        match self.try_load() {
            Ok(StoredUser::Present(record)) => Some(record),
            Ok(StoredUser::Empty) => Some(UserRecord::default()),
            Ok(StoredUser::SignedOut) => None,
            Err(e) => {
                tracing::warn!(error = %e, "falling back to the default user record");
                Some(UserRecord::default())
            }
        }
    }

    /// Like [`Self::load`], but tells an empty slot from a signed-out one and
    /// surfaces errors.
    pub fn try_load(&self) -> ProfileResult<StoredUser> {
        let Some(raw) = self.storage.get(USER_KEY)? else {
            return Ok(StoredUser::Empty);
        };

        match serde_json::from_str::<Option<UserRecord>>(&raw) {
            Ok(Some(record)) => Ok(StoredUser::Present(record)),
            Ok(None) => Ok(StoredUser::SignedOut),
            Err(e) => Err(KnownErrors::malformed(USER_KEY, e)),
        }
    }

    pub fn save(&self, record: &UserRecord) -> ProfileResult<()> {
        let raw = serde_json::to_string(record).map_err(|e| KnownErrors::encode(USER_KEY, e))?;
        self.storage.set(USER_KEY, &raw)
    }

    pub fn clear(&self) -> ProfileResult<()> {
        self.storage.remove(USER_KEY)
    }
}
