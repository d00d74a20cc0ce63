use serde::{Deserialize, Serialize};
use std::fmt;

use super::dispatch::dispatch_payment;
use super::value_objects::{CardNumber, CardType};

// ============================================================================
// Payment Method - closed union of the accepted ways to pay
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PaymentMethod {
    Cash,
    Cheque {
        check_number: String,
    },
    Card {
        card_type: CardType,
        card_number: CardNumber,
    },
}

impl PaymentMethod {
    pub fn cash() -> Self {
        PaymentMethod::Cash
    }

    pub fn cheque(check_number: impl Into<String>) -> Self {
        PaymentMethod::Cheque {
            check_number: check_number.into(),
        }
    }

    pub fn card(card_type: CardType, card_number: CardNumber) -> Self {
        PaymentMethod::Card {
            card_type,
            card_number,
        }
    }

    pub fn kind(&self) -> PaymentKind {
        dispatch_payment(
            self,
            || PaymentKind::Cash,
            |_| PaymentKind::Cheque,
            |_, _| PaymentKind::Card,
        )
    }
}

/// Payload-free tag of a `PaymentMethod`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentKind {
    Cash,
    Cheque,
    Card,
}

impl PaymentKind {
    /// Every tag, for checks that must cover each variant
    #[cfg(test)]
    pub const ALL: [PaymentKind; 3] = [PaymentKind::Cash, PaymentKind::Cheque, PaymentKind::Card];
}

impl fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentKind::Cash => "Cash",
            PaymentKind::Cheque => "Cheque",
            PaymentKind::Card => "Card",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
