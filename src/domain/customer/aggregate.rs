use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::CustomerError;
use super::value_objects::{CustomerId, CustomerName};

// ============================================================================
// Customer Aggregate
// ============================================================================
//
// Immutable record. Every change produces a new `Customer`; the value it was
// derived from is left as it was.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: CustomerName,
}

impl Customer {
    pub fn new(id: CustomerId, name: CustomerName) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &CustomerName {
        &self.name
    }

    /// Copy of this customer with the same id and a new name
    pub fn with_new_name(&self, new_name: impl Into<String>) -> Result<Self, CustomerError> {
        let name = CustomerName::new(new_name)?;
        Ok(Self { id: self.id, name })
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id={}, Name={}", self.id, self.name)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn create_test_customer() -> Customer {
        Customer::new(CustomerId::new(1), CustomerName::new("Alice").unwrap())
    }

    #[test]
    fn test_customer_creation() {
        let customer = create_test_customer();

        assert_eq!(customer.id(), CustomerId::new(1));
        assert_eq!(customer.name().as_str(), "Alice");
    }

    #[test]
    fn test_rename_keeps_id_and_changes_name() {
        let original = create_test_customer();
        let renamed = original.with_new_name("Bob").unwrap();

        assert_eq!(renamed.id(), CustomerId::new(1));
        assert_eq!(renamed.name().as_str(), "Bob");
        assert_eq!(
            renamed,
            Customer::new(CustomerId::new(1), CustomerName::new("Bob").unwrap())
        );
    }

    #[test]
    fn test_rename_leaves_original_untouched() {
        let original = create_test_customer();
        let snapshot = original.clone();

        let _renamed = original.with_new_name("Bob").unwrap();

        assert_eq!(original, snapshot);
        assert_eq!(original.name().as_str(), "Alice");
    }

    #[test]
    fn test_rename_to_empty_fails() {
        let original = create_test_customer();
        let result = original.with_new_name("");

        assert!(matches!(result, Err(CustomerError::EmptyName)));
    }

    #[test]
    fn test_display() {
        assert_eq!(create_test_customer().to_string(), "Id=1, Name=Alice");
    }

    fn name_strategy() -> impl Strategy<Value = String> {
        "[A-Za-z\u{e0}-\u{ff}][A-Za-z\u{e0}-\u{ff} .'-]{0,40}"
    }

    proptest! {
        #[test]
        fn prop_rename_keeps_id_and_sets_name(
            id in any::<i32>(),
            name in name_strategy(),
            new_name in name_strategy()
        ) {
            let original = Customer::new(CustomerId::new(id), CustomerName::new(name).unwrap());
            let snapshot = original.clone();

            let renamed = original.with_new_name(new_name.clone()).unwrap();

            prop_assert_eq!(renamed.id(), CustomerId::new(id));
            prop_assert_eq!(renamed.name().as_str(), new_name.as_str());
            prop_assert_eq!(original, snapshot);
        }

        #[test]
        fn prop_rename_to_blank_fails(id in any::<i32>(), blank in "[ \t\n]{0,10}") {
            let original = Customer::new(CustomerId::new(id), CustomerName::new("Alice").unwrap());

            prop_assert!(matches!(original.with_new_name(blank), Err(CustomerError::EmptyName)));
        }
    }
}
