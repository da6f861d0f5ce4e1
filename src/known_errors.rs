use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KnownErrors {
    #[error("browser storage is not available")]
    StorageUnavailable,

    #[error("failed to read storage slot {key:?}")]
    StorageRead { key: String },

    #[error("failed to write storage slot {key:?}")]
    StorageWrite { key: String },

    #[error("storage slot {key:?} holds malformed data: {reason}")]
    MalformedRecord { key: String, reason: String },

    #[error("failed to encode value for storage slot {key:?}: {reason}")]
    Encode { key: String, reason: String },

    #[error("unknown avatar identifier {0:?}")]
    InvalidAvatar(String),
}

pub type ProfileResult<T> = Result<T, KnownErrors>;

impl KnownErrors {
    pub fn malformed(key: &str, err: serde_json::Error) -> Self {
        Self::MalformedRecord {
            key: key.to_string(),
            reason: err.to_string(),
        }
    }

    pub fn encode(key: &str, err: serde_json::Error) -> Self {
        Self::Encode {
            key: key.to_string(),
            reason: err.to_string(),
        }
    }
}
