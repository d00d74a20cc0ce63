use super::method::PaymentMethod;
use super::value_objects::{CardNumber, CardType};

// ============================================================================
// Payment Dispatch
// ============================================================================
//
// Runs exactly one handler per payment, chosen by the active variant, and
// hands it that variant's payload. Both forms below match without a wildcard
// arm, so a new `PaymentMethod` variant fails to compile until it is handled
// here.
//
// ============================================================================

/// Invoke the handler matching `method`'s variant and return its result
pub fn dispatch_payment<R>(
    method: &PaymentMethod,
    on_cash: impl FnOnce() -> R,
    on_cheque: impl FnOnce(&str) -> R,
    on_card: impl FnOnce(CardType, &CardNumber) -> R,
) -> R {
    match method {
        PaymentMethod::Cash => on_cash(),
        PaymentMethod::Cheque { check_number } => on_cheque(check_number),
        PaymentMethod::Card {
            card_type,
            card_number,
        } => on_card(*card_type, card_number),
    }
}

/// Visitor over payment variants, for handlers that carry their own state
pub trait PaymentHandler {
    type Output;

    fn on_cash(&mut self) -> Self::Output;
    fn on_cheque(&mut self, check_number: &str) -> Self::Output;
    fn on_card(&mut self, card_type: CardType, card_number: &CardNumber) -> Self::Output;
}

impl PaymentMethod {
    pub fn accept<H: PaymentHandler>(&self, handler: &mut H) -> H::Output {
        match self {
            PaymentMethod::Cash => handler.on_cash(),
            PaymentMethod::Cheque { check_number } => handler.on_cheque(check_number),
            PaymentMethod::Card {
                card_type,
                card_number,
            } => handler.on_card(*card_type, card_number),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
