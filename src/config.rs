use crate::domain::payment::{CardType, PaymentError};

// ============================================================================
// Demo Configuration
// ============================================================================
//
// Values for the sample run, read from DEMO_* environment variables.
// Anything unset falls back to the default; anything unparseable is an error.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be an integer, got {value:?}")]
    InvalidInteger { var: &'static str, value: String },

    #[error("{var} is invalid: {source}")]
    InvalidCardType {
        var: &'static str,
        #[source]
        source: PaymentError,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    /// Id of the sample customer and of the repository lookup
    pub customer_id: i32,
    /// Name the sample customer starts with
    pub customer_name: String,
    /// Name the sample customer is renamed to
    pub rename_to: String,
    pub card_type: CardType,
    pub card_number: String,
    pub cheque_number: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            customer_id: 1,
            customer_name: "Alice".to_string(),
            rename_to: "Bob".to_string(),
            card_type: CardType::Visa,
            card_number: "1234".to_string(),
            cheque_number: "9".to_string(),
        }
    }
}

impl DemoConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration from any key lookup, e.g. a map in tests
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |var: &str| lookup(var).filter(|v| !v.is_empty());

        let customer_id = match get("DEMO_CUSTOMER_ID") {
            Some(value) => value.trim().parse::<i32>().map_err(|_| ConfigError::InvalidInteger {
                var: "DEMO_CUSTOMER_ID",
                value,
            })?,
            None => defaults.customer_id,
        };

        let card_type = match get("DEMO_CARD_TYPE") {
            Some(value) => value.parse::<CardType>().map_err(|source| ConfigError::InvalidCardType {
                var: "DEMO_CARD_TYPE",
                source,
            })?,
            None => defaults.card_type,
        };

        Ok(Self {
            customer_id,
            customer_name: get("DEMO_CUSTOMER_NAME").unwrap_or(defaults.customer_name),
            rename_to: get("DEMO_RENAME_TO").unwrap_or(defaults.rename_to),
            card_type,
            card_number: get("DEMO_CARD_NUMBER").unwrap_or(defaults.card_number),
            cheque_number: get("DEMO_CHEQUE_NUMBER").unwrap_or(defaults.cheque_number),
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
