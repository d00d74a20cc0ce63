// ============================================================================
// Common Domain Types - constrained primitives shared across aggregates
// ============================================================================

pub mod string50;

pub use string50::*;
