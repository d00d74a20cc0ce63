use crate::domain::common::String50;
use crate::domain::customer::{
    Customer, CustomerError, CustomerId, CustomerName, CustomerRepository,
};
use crate::domain::payment::{CardNumber, CardType, PaymentHandler, PaymentMethod};

use super::sink::PaymentSink;

// ============================================================================
// Payment Client
// ============================================================================
//
// Builds domain values and feeds payments through `PaymentLine`, sending
// one formatted line per payment to the sink.
//
// ============================================================================

/// Formats the line recorded for each processed payment
pub struct PaymentLine;

impl PaymentHandler for PaymentLine {
    type Output = String;

    fn on_cash(&mut self) -> String {
        "Paid in cash".to_string()
    }

    fn on_cheque(&mut self, check_number: &str) -> String {
        format!("Paid by cheque {}", check_number)
    }

    fn on_card(&mut self, card_type: CardType, card_number: &CardNumber) -> String {
        format!(
            "Paid by card CardType={}, CardNumber={}",
            card_type,
            card_number.as_str()
        )
    }
}

pub struct PaymentClient<R, S> {
    repository: R,
    sink: S,
}

impl<R: CustomerRepository, S: PaymentSink> PaymentClient<R, S> {
    pub fn new(repository: R, sink: S) -> Self {
        Self { repository, sink }
    }

    pub fn create_customer(&self, id: i32, name: &str) -> Result<Customer, CustomerError> {
        let customer = Customer::new(CustomerId::new(id), CustomerName::new(name)?);
        tracing::info!(
            customer_id = customer.id().value(),
            name = customer.name().as_str(),
            "Customer created"
        );
        Ok(customer)
    }

    pub fn change_customer_name(
        &self,
        customer: &Customer,
        new_name: &str,
    ) -> Result<Customer, CustomerError> {
        let renamed = customer.with_new_name(new_name)?;
        tracing::info!(
            customer_id = renamed.id().value(),
            old_name = customer.name().as_str(),
            new_name = renamed.name().as_str(),
            "Customer renamed"
        );
        Ok(renamed)
    }

    pub fn lookup_customer(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        let customer = self.repository.get_customer(id)?;
        tracing::info!(customer = %customer, "Customer loaded");
        Ok(customer)
    }

    pub fn create_string50(&self, value: &str) -> Option<String50> {
        let result = String50::create(value);
        tracing::debug!(
            accepted = result.is_some(),
            value = result.as_ref().map(String50::value),
            "String50 requested"
        );
        result
    }

    pub fn create_card_payment(&self, card_type: CardType, card_number: &str) -> PaymentMethod {
        PaymentMethod::card(card_type, CardNumber::new(card_number))
    }

    /// Dispatch `method`, record the resulting line in the sink, and return it
    pub fn process_payment(&mut self, method: &PaymentMethod) -> String {
        let line = method.accept(&mut PaymentLine);

        tracing::debug!(kind = %method.kind(), "Payment dispatched");
        self.sink.record(&line);
        line
    }

    #[cfg(test)]
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
