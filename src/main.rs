use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod client;
mod config;
mod domain;

use client::{ConsoleSink, PaymentClient};
use config::DemoConfig;
use domain::customer::{CustomerId, StubCustomerRepository};
use domain::payment::PaymentMethod;

fn main() -> anyhow::Result<()> {
    // Structured logging, INFO by default, overridable with RUST_LOG
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,customer_payments=debug")),
        )
        .init();

    let config = DemoConfig::from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    let mut client = PaymentClient::new(StubCustomerRepository, ConsoleSink);

    // === 1. Customers ===
    let customer = client.create_customer(config.customer_id, &config.customer_name)?;
    println!("{}", customer);

    let renamed = client.change_customer_name(&customer, &config.rename_to)?;
    println!("{}", renamed);

    let loaded = client.lookup_customer(CustomerId::new(config.customer_id))?;
    println!("{}", loaded);

    match client.create_string50("hello") {
        Some(value) => tracing::info!(value = value.value(), "String50 created"),
        None => tracing::warn!("String50 rejected"),
    }

    // === 2. Payments ===
    let payments = [
        PaymentMethod::cash(),
        PaymentMethod::cheque(config.cheque_number.as_str()),
        client.create_card_payment(config.card_type, &config.card_number),
    ];

    for payment in &payments {
        client.process_payment(payment);
    }

    tracing::info!(processed = payments.len(), "Done");
    Ok(())
}
