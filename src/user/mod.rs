pub mod avatar;
pub mod store;

pub use avatar::Avatar;
pub use store::{StoredUser, UserStore};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::ops::RangeInclusive;

pub const DEFAULT_HOURLY_RATE: u32 = 10;

/// Rates offered by the profile editor. Stored records are not checked against it.
pub const RATE_OPTIONS: RangeInclusive<u32> = 6..=25;

/// The persisted profile of the person using this browser.
///
/// Decoding is lenient per field, so a record written by an older build or
/// edited by hand still loads with defaults for whatever is missing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,

    #[serde(default = "default_hourly_rate", deserialize_with = "lenient_rate")]
    pub hourly_rate: u32,

    #[serde(default, deserialize_with = "avatar::lenient")]
    pub avatar: Avatar,
}

fn default_hourly_rate() -> u32 {
    DEFAULT_HOURLY_RATE
}

fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(name)) => name,
        None | Some(Value::Null) => String::new(),
        Some(other) => {
            tracing::warn!(%other, "ignoring non-text user name");
            String::new()
        }
    })
}

/// Accepts any whole, non-negative number that fits a `u32`, so `12.0`
/// reads as `12`. Anything else becomes [`DEFAULT_HOURLY_RATE`].
fn lenient_rate<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let rate = raw.as_ref().and_then(Value::as_number).and_then(|n| {
        n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX))
                .map(|f| f as u64)
        })
    });

    match rate.and_then(|r| u32::try_from(r).ok()) {
        Some(rate) => Ok(rate),
        None => {
            if raw.as_ref().is_some_and(|v| !v.is_null()) {
                tracing::warn!(?raw, "unreadable hourly rate, using the default");
            }
            Ok(DEFAULT_HOURLY_RATE)
        }
    }
}

impl Default for UserRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            hourly_rate: DEFAULT_HOURLY_RATE,
            avatar: Avatar::default(),
        }
    }
}

impl UserRecord {
    pub fn rate_label(&self) -> String {
        rate_label(self.hourly_rate)
    }
}

pub fn rate_label(rate: u32) -> String {
    format!("{rate}€/h")
}
