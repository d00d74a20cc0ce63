// ============================================================================
// Customer Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CustomerError {
    #[error("Customer name cannot be empty")]
    EmptyName,
}
