// ============================================================================
// Payment Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaymentError {
    #[error("Unknown card type: {0}")]
    UnknownCardType(String),
}
