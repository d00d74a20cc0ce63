// ============================================================================
// Domain Layer - Value Objects and Business Types
// ============================================================================
//
// Each area has its own subdirectory with its value objects, errors and
// behaviour. Nothing here does I/O; output goes through the client layer.
//
// ============================================================================

pub mod common;
pub mod customer;
pub mod payment;
