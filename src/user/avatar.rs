use crate::known_errors::KnownErrors;
use nutype::nutype;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of icons in the avatar catalog.
pub const AVATAR_COUNT: u8 = 20;

/// Where the host serves the icon files.
pub const AVATAR_ASSET_DIR: &str = "/userIcons";

/// One of the catalog icons, `icon1.png` through `icon20.png`.
///
/// Stored and serialized as its file name. Parsing also accepts the bare
/// identifier (`icon7`).
#[nutype(
    validate(greater_or_equal = 1, less_or_equal = 20),
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, TryFrom, Default),
    default = 2
)]
pub struct Avatar(u8);

impl Avatar {
    /// Every avatar, in display order.
    pub fn catalog() -> impl Iterator<Item = Avatar> {
        (1..=AVATAR_COUNT).filter_map(|n| Avatar::try_new(n).ok())
    }

    pub fn number(&self) -> u8 {
        self.into_inner()
    }

    pub fn file_name(&self) -> String {
        format!("icon{}.png", self.number())
    }

    pub fn asset_path(&self) -> String {
        format!("{}/{}", AVATAR_ASSET_DIR, self.file_name())
    }

    pub fn alt_text(&self) -> String {
        format!("Avatar {}", self.number())
    }
}

impl fmt::Display for Avatar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "icon{}.png", self.number())
    }
}

impl FromStr for Avatar {
    type Err = KnownErrors;

    fn from_str(s: &str) -> Result<Self, KnownErrors> {
        let trimmed = s.trim();
        let stem = trimmed.strip_suffix(".png").unwrap_or(trimmed);

        stem.strip_prefix("icon")
            .and_then(|number| number.parse::<u8>().ok())
            .and_then(|number| Avatar::try_new(number).ok())
            .ok_or_else(|| KnownErrors::InvalidAvatar(s.to_string()))
    }
}

impl Serialize for Avatar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Avatar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Field decoder that maps a null or unknown identifier to the default avatar.
pub(crate) fn lenient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Avatar, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;

    Ok(match raw {
        Some(raw) => raw.parse().unwrap_or_else(|e: KnownErrors| {
            tracing::warn!(error = %e, "falling back to the default avatar");
            Avatar::default()
        }),
        None => Avatar::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_twenty_icons_in_order() {
        let names: Vec<String> = Avatar::catalog().map(|a| a.file_name()).collect();

        assert_eq!(names.len(), 20);
        assert_eq!(names.first().map(String::as_str), Some("icon1.png"));
        assert_eq!(names.last().map(String::as_str), Some("icon20.png"));
    }

    #[test]
    fn test_default_is_icon2() {
        assert_eq!(Avatar::default().to_string(), "icon2.png");
    }

    #[test]
    fn test_parse_accepts_file_name_and_bare_identifier() {
        let with_ext: Avatar = "icon7.png".parse().expect("file name should parse");
        let bare: Avatar = "icon7".parse().expect("bare identifier should parse");

        assert_eq!(with_ext, bare);
        assert_eq!(bare.asset_path(), "/userIcons/icon7.png");
    }

    #[test]
    fn test_parse_rejects_outside_catalog() {
        for raw in ["icon0.png", "icon21.png", "avatar3.png", "icon.png", ""] {
            assert_eq!(
                raw.parse::<Avatar>(),
                Err(KnownErrors::InvalidAvatar(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_serializes_as_file_name() {
        let avatar = Avatar::try_new(13).expect("13 is in the catalog");

        assert_eq!(
            serde_json::to_string(&avatar).expect("avatar should serialize"),
            "\"icon13.png\""
        );
    }
}
