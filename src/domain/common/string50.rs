use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// String50 - Constrained String
// ============================================================================
//
// A non-empty string of at most 50 characters. The only way in is
// `String50::create`, which yields `None` when the input breaks the bounds.
//
// ============================================================================

pub const STRING50_MAX_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct String50(String);

impl String50 {
    /// Build a `String50`, or `None` if `value` is empty or longer than 50 characters
    pub fn create(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let len = value.chars().count();
        if len == 0 || len > STRING50_MAX_LEN {
            return None;
        }
        Some(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for String50 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Deserialization goes through `create` so the bound holds for decoded values too.
impl<'de> Deserialize<'de> for String50 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        String50::create(raw).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "expected 1 to {} characters",
                STRING50_MAX_LEN
            ))
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_short_string() {
        let s = String50::create("hello").unwrap();
        assert_eq!(s.value(), "hello");
        assert_eq!(s.to_string(), "hello");
    }

    #[test]
    fn test_create_exactly_fifty_chars() {
        let raw = "a".repeat(50);
        assert!(String50::create(raw).is_some());
    }

    #[test]
    fn test_create_too_long_is_none() {
        let raw = "a".repeat(51);
        assert!(String50::create(raw).is_none());
    }

    #[test]
    fn test_create_empty_is_none() {
        assert!(String50::create("").is_none());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 50 two-byte characters
        let raw = "é".repeat(50);
        assert!(String50::create(raw).is_some());
    }

    #[test]
    fn test_deserialize_rejects_too_long() {
        let json = format!("\"{}\"", "x".repeat(51));
        let result: Result<String50, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }
}
