//! Common domain types for Steam.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::serde_helpers::string_or_number;

/// Steam application id (730 is Counter-Strike 2).
pub type AppId = u32;

/// Inventory context id (2 holds tradable items for most games).
pub type ContextId = u64;

/// A 64-bit Steam account id ("SteamID64").
///
/// Serialized as a decimal string; accepts strings or numbers when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SteamId(u64);

impl SteamId {
    /// Offset between a SteamID64 and the 32-bit account id of an individual account.
    pub const INDIVIDUAL_BASE: u64 = 76561197960265728;

    /// Wrap a SteamID64.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw SteamID64.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// The 32-bit account id, as used by the trade offer `partner` field.
    pub fn account_id(&self) -> u32 {
        (self.0.wrapping_sub(Self::INDIVIDUAL_BASE) & 0xFFFF_FFFF) as u32
    }
}

impl From<u64> for SteamId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SteamId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl Serialize for SteamId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        string_or_number::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for SteamId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        string_or_number::deserialize(deserializer).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steam_id_parse_and_display() {
        let id: SteamId = "76561197960435530".parse().unwrap();
        assert_eq!(id.as_u64(), 76561197960435530);
        assert_eq!(id.to_string(), "76561197960435530");
        assert!("not-an-id".parse::<SteamId>().is_err());
    }

    #[test]
    fn test_steam_id_account_id() {
        let id = SteamId::new(76561197960435530);
        assert_eq!(id.account_id(), 169802);
    }

    #[test]
    fn test_steam_id_serde() {
        let id = SteamId::new(76561197960435530);
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""76561197960435530""#);
        let back: SteamId = serde_json::from_str("76561197960435530").unwrap();
        assert_eq!(back, id);
    }
}
