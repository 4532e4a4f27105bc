//! Strongly-typed numeric IDs. Use these instead of raw integers.
//!
//! The gateway assigns integer ids, but newer json-server releases hand them back as
//! numeric strings. Both forms deserialize to the same id; ids always serialize as numbers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Event ID assigned by the gateway on creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub u64);

/// Category ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub u64);

/// User ID, referenced by `Event::created_by`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub u64);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

fn parse_id(kind: &str, s: &str) -> Result<u64, String> {
    s.trim()
        .parse::<u64>()
        .map_err(|e| format!("Invalid {} id {:?}: {}", kind, s, e))
}

macro_rules! id_type {
    ($name:ident, $kind:literal) => {
        impl $name {
            pub fn get(self) -> u64 {
                self.0
            }
        }
        impl FromStr for $name {
            type Err = String;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_id($kind, s).map(Self)
            }
        }
        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
                ser.serialize_u64(self.0)
            }
        }
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
                match RawId::deserialize(de)? {
                    RawId::Number(n) => Ok(Self(n)),
                    RawId::Text(s) => Self::from_str(&s).map_err(serde::de::Error::custom),
                }
            }
        }
    };
}
id_type!(EventId, "event");
id_type!(CategoryId, "category");
id_type!(UserId, "user");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_numbers_and_numeric_strings() {
        let a: EventId = serde_json::from_str("7").unwrap();
        let b: EventId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(a, b);
        assert_eq!(serde_json::to_string(&b).unwrap(), "7");
    }

    #[test]
    fn rejects_non_numeric_text() {
        let err = serde_json::from_str::<CategoryId>("\"abc\"").unwrap_err();
        assert!(err.to_string().contains("Invalid category id"));
        assert!("x1".parse::<UserId>().is_err());
        assert_eq!(" 12 ".parse::<UserId>().unwrap(), UserId(12));
    }
}
