// ============================================================================
// Payment Domain
// ============================================================================
//
// - Value objects (CardType, CardNumber)
// - PaymentMethod (closed union: Cash | Cheque | Card)
// - Dispatch (exhaustive handler selection, closure and visitor forms)
// - Errors (PaymentError enum)
//
// ============================================================================

pub mod value_objects;
pub mod method;
pub mod dispatch;
pub mod errors;

// Re-export for convenience
pub use value_objects::*;
pub use method::*;
pub use dispatch::*;
pub use errors::*;
