// Private module declarations
mod payment_client;
mod sink;

// Re-export for public API
pub use payment_client::PaymentClient;
pub use sink::ConsoleSink;
