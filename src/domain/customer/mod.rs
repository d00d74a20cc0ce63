// ============================================================================
// Customer Domain
// ============================================================================
//
// - Value objects (CustomerId, CustomerName)
// - Errors (CustomerError enum)
// - Aggregate (Customer, renamed by functional update)
// - Repository (lookup seam + stub)
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod aggregate;
pub mod repository;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use aggregate::*;
pub use repository::*;
