//! Codepoint references.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A Unicode scalar value identifying a character, real or private use.
///
/// Serializes as an integer (the storage form). Deserializes from either an
/// integer or a one-character string, since client payloads refer to
/// characters by the character itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codepoint(pub u32);

impl Codepoint {
    pub fn value(self) -> u32 {
        self.0
    }

    /// The character for this codepoint, `None` for surrogates and
    /// out-of-range values.
    pub fn as_char(self) -> Option<char> {
        char::from_u32(self.0)
    }
}

impl From<char> for Codepoint {
    fn from(c: char) -> Self {
        Codepoint(c as u32)
    }
}

impl fmt::Display for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

impl Serialize for Codepoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

struct CodepointVisitor;

impl<'de> Visitor<'de> for CodepointVisitor {
    type Value = Codepoint;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a codepoint number or a single character")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Codepoint, E> {
        u32::try_from(value)
            .ok()
            .filter(|v| char::from_u32(*v).is_some())
            .map(Codepoint)
            .ok_or_else(|| E::custom(format!("{} is not a Unicode scalar value", value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Codepoint, E> {
        match u64::try_from(value) {
            Ok(value) => self.visit_u64(value),
            Err(_) => Err(E::custom(format!("negative codepoint {}", value))),
        }
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Codepoint, E> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Codepoint::from(c)),
            _ => Err(E::invalid_value(de::Unexpected::Str(value), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for Codepoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CodepointVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_number_and_char() {
        let from_number: Codepoint = serde_json::from_str("26446").unwrap();
        let from_char: Codepoint = serde_json::from_str("\"李\"").unwrap();
        assert_eq!(from_number, Codepoint(0x674E));
        assert_eq!(from_char, Codepoint(0x674E));
    }

    #[test]
    fn test_serialize_as_number() {
        assert_eq!(serde_json::to_string(&Codepoint(0xE200)).unwrap(), "57856");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(serde_json::from_str::<Codepoint>("\"木子\"").is_err());
        assert!(serde_json::from_str::<Codepoint>("-1").is_err());
        assert!(serde_json::from_str::<Codepoint>("55296").is_err()); // surrogate
    }

    #[test]
    fn test_display() {
        assert_eq!(Codepoint(0x674E).to_string(), "U+674E");
        assert_eq!(Codepoint(0xF0000).to_string(), "U+F0000");
    }
}
