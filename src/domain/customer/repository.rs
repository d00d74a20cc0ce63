use super::aggregate::Customer;
use super::errors::CustomerError;
use super::value_objects::{CustomerId, CustomerName};

// ============================================================================
// Customer Repository
// ============================================================================
//
// Lookup seam for customers. Lookups return `Result` so a storage-backed
// implementation can report failures; the stub below never fails.
//
// ============================================================================

pub trait CustomerRepository {
    fn get_customer(&self, id: CustomerId) -> Result<Customer, CustomerError>;
}

/// Answers every lookup with a customer named "Alice" carrying the requested id
#[derive(Debug, Clone, Default)]
pub struct StubCustomerRepository;

impl StubCustomerRepository {
    const NAME: &'static str = "Alice";
}

impl CustomerRepository for StubCustomerRepository {
    fn get_customer(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        let name = CustomerName::new(Self::NAME)?;
        tracing::debug!(customer_id = %id, "Stub repository lookup");
        Ok(Customer::new(id, name))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_returns_alice_for_any_id() {
        let repo = StubCustomerRepository;

        for raw in [1, 7, -3, i32::MAX] {
            let customer = repo.get_customer(CustomerId::new(raw)).unwrap();
            assert_eq!(customer.id(), CustomerId::new(raw));
            assert_eq!(customer.name().as_str(), "Alice");
        }
    }
}
