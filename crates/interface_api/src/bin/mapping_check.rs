//! Mapping Configuration Check Binary
//!
//! Builds the application's mapper configuration, validates it, and prints a
//! JSON summary of every type map. Exits non-zero if the configuration
//! cannot be built or fails validation.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin mapping-check
//!
//! # Run with environment variables
//! APP_PRODUCT__VUL=VUL2 APP_LOG_LEVEL=debug cargo run --bin mapping-check
//! ```
//!
//! # Environment Variables
//!
//! * `APP_PRODUCT__UL`, `APP_PRODUCT__UA`, `APP_PRODUCT__VUL`,
//!   `APP_PRODUCT__VUL_ENHANCED`, `APP_PRODUCT__ULPB`, `APP_PRODUCT__PPLI` - Product codes
//! * `APP_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use anyhow::Context;
use interface_api::{config::ApplicationSettings, startup};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let settings = ApplicationSettings::from_env().context("failed to load application settings")?;
    init_tracing(&settings.log_level);

    tracing::info!(
        ul = %settings.product.ul,
        vul = %settings.product.vul,
        "Building mapper configuration"
    );

    let configuration = startup::create_mapper_configuration(&settings)?;
    configuration
        .assert_configuration_is_valid()
        .context("mapper configuration is invalid")?;

    tracing::info!(type_maps = configuration.len(), "Mapper configuration is valid");
    println!("{}", serde_json::to_string_pretty(&configuration.summary())?);
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
