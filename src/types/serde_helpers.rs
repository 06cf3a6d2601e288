//! Custom serde helpers for Steam's inconsistent JSON encodings.
//!
//! The Web API and the community site disagree on how numbers and flags are
//! encoded: ids arrive as strings or numbers, flags as `0`/`1` or booleans.

use std::fmt;

use serde::{Deserialize, Deserializer, Serializer, de};

/// Deserialize a flag that may be encoded as `0`/`1` or as a boolean.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use steam_trade_client::types::serde_helpers::int_bool;
///
/// #[derive(Deserialize)]
/// struct Achievement {
///     #[serde(with = "int_bool")]
///     achieved: bool,
/// }
///
/// let a: Achievement = serde_json::from_str(r#"{"achieved":1}"#).unwrap();
/// assert!(a.achieved);
/// let a: Achievement = serde_json::from_str(r#"{"achieved":false}"#).unwrap();
/// assert!(!a.achieved);
/// ```
pub mod int_bool {
    use super::*;

    /// Serialize as `0` or `1`.
    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*value))
    }

    /// Deserialize from an integer or a boolean.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IntBoolVisitor;

        impl<'de> de::Visitor<'de> for IntBoolVisitor {
            type Value = bool;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("0, 1 or a boolean")
            }

            fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v)
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v != 0)
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v != 0)
            }
        }

        deserializer.deserialize_any(IntBoolVisitor)
    }
}

/// Deserialize a `u64` that may be encoded as a JSON number or a string.
///
/// Serializes as a string, which is what the community endpoints expect.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use steam_trade_client::types::serde_helpers::string_or_number;
///
/// #[derive(Deserialize)]
/// struct Asset {
///     #[serde(with = "string_or_number")]
///     assetid: u64,
/// }
///
/// let a: Asset = serde_json::from_str(r#"{"assetid":"27136573452"}"#).unwrap();
/// assert_eq!(a.assetid, 27136573452);
/// let a: Asset = serde_json::from_str(r#"{"assetid":27136573452}"#).unwrap();
/// assert_eq!(a.assetid, 27136573452);
/// ```
pub mod string_or_number {
    use super::*;

    /// Serialize as a decimal string.
    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    /// Deserialize from a number or a numeric string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StringOrNumberVisitor;

        impl<'de> de::Visitor<'de> for StringOrNumberVisitor {
            type Value = u64;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an unsigned integer or a numeric string")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v)
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                u64::try_from(v).map_err(de::Error::custom)
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.trim().parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(StringOrNumberVisitor)
    }
}

/// Deserialize empty strings as `None`.
///
/// Steam sends `""` for unset avatar URLs and captcha ids.
pub mod empty_string_as_none {
    use super::*;

    /// Deserialize an optional string, treating empty strings as None.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        Ok(opt.filter(|s| !s.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Flag {
        #[serde(with = "int_bool")]
        value: bool,
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Id {
        #[serde(with = "string_or_number")]
        value: u64,
    }

    #[derive(Debug, Deserialize)]
    struct MaybeText {
        #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
        value: Option<String>,
    }

    #[test]
    fn test_int_bool() {
        let flag: Flag = serde_json::from_str(r#"{"value":0}"#).unwrap();
        assert!(!flag.value);
        let flag: Flag = serde_json::from_str(r#"{"value":true}"#).unwrap();
        assert!(flag.value);
        assert_eq!(
            serde_json::to_string(&Flag { value: true }).unwrap(),
            r#"{"value":1}"#
        );
    }

    #[test]
    fn test_string_or_number() {
        let id: Id = serde_json::from_str(r#"{"value":"76561197960435530"}"#).unwrap();
        assert_eq!(id.value, 76561197960435530);
        let id: Id = serde_json::from_str(r#"{"value":730}"#).unwrap();
        assert_eq!(id.value, 730);
        assert!(serde_json::from_str::<Id>(r#"{"value":"abc"}"#).is_err());
        assert!(serde_json::from_str::<Id>(r#"{"value":-1}"#).is_err());
        assert_eq!(
            serde_json::to_string(&Id { value: 2 }).unwrap(),
            r#"{"value":"2"}"#
        );
    }

    #[test]
    fn test_empty_string_as_none() {
        let text: MaybeText = serde_json::from_str(r#"{"value":""}"#).unwrap();
        assert!(text.value.is_none());
        let text: MaybeText = serde_json::from_str(r#"{"value":"abc"}"#).unwrap();
        assert_eq!(text.value.as_deref(), Some("abc"));
        let text: MaybeText = serde_json::from_str(r#"{}"#).unwrap();
        assert!(text.value.is_none());
    }
}
