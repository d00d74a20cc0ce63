use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::CustomerError;

// ============================================================================
// Customer Value Objects
// ============================================================================

/// Customer identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i32);

impl CustomerId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Customer display name, never empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerName(String);

impl CustomerName {
    pub fn new(name: impl Into<String>) -> Result<Self, CustomerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CustomerError::EmptyName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CustomerName {
    type Error = CustomerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CustomerName> for String {
    fn from(name: CustomerName) -> Self {
        name.0
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_id_equality() {
        assert_eq!(CustomerId::new(1), CustomerId::new(1));
        assert_ne!(CustomerId::new(1), CustomerId::new(2));
        assert_eq!(CustomerId::new(42).value(), 42);
    }

    #[test]
    fn test_customer_name_creation() {
        let name = CustomerName::new("Alice").unwrap();
        assert_eq!(name.as_str(), "Alice");
        assert_eq!(name.to_string(), "Alice");
    }

    #[test]
    fn test_customer_name_empty_fails() {
        assert!(matches!(CustomerName::new(""), Err(CustomerError::EmptyName)));
        assert!(matches!(CustomerName::new("   "), Err(CustomerError::EmptyName)));
    }

    #[test]
    fn test_customer_name_deserialize_validates() {
        let ok: CustomerName = serde_json::from_str("\"Bob\"").unwrap();
        assert_eq!(ok.as_str(), "Bob");

        let empty: Result<CustomerName, _> = serde_json::from_str("\"\"");
        assert!(empty.is_err());
    }
}
