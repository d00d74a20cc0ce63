use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::PaymentError;

// ============================================================================
// Payment Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Visa,
    Mastercard,
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CardType::Visa => "Visa",
            CardType::Mastercard => "Mastercard",
        };
        f.write_str(name)
    }
}

impl FromStr for CardType {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visa" => Ok(CardType::Visa),
            "mastercard" => Ok(CardType::Mastercard),
            _ => Err(PaymentError::UnknownCardType(s.to_string())),
        }
    }
}

/// Card number token, stored as given
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardNumber(String);

impl CardNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardNumber {
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
    fn test_card_type_parse_is_case_insensitive() {
        assert_eq!("Visa".parse::<CardType>().unwrap(), CardType::Visa);
        assert_eq!("VISA".parse::<CardType>().unwrap(), CardType::Visa);
        assert_eq!(" mastercard ".parse::<CardType>().unwrap(), CardType::Mastercard);
    }

    #[test]
    fn test_card_type_parse_unknown() {
        let err = "amex".parse::<CardType>().unwrap_err();
        assert_eq!(err, PaymentError::UnknownCardType("amex".to_string()));
    }

    #[test]
    fn test_card_type_display_parses_back() {
        for card_type in [CardType::Visa, CardType::Mastercard] {
            assert_eq!(card_type.to_string().parse::<CardType>().unwrap(), card_type);
        }
    }

    #[test]
    fn test_card_number_keeps_token_verbatim() {
        let number = CardNumber::new("0000-1234 x");
        assert_eq!(number.as_str(), "0000-1234 x");
        assert_eq!(number.to_string(), "0000-1234 x");
    }
}
