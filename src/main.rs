//! Entry point for the payslip engine HTTP server.
//!
//! Starts an Axum server exposing the payslip generation API. The
//! configuration directory may be set via the `PAYSLIP_CONFIG_DIR`
//! environment variable (default `config/ato`) and the bind address via
//! `PAYSLIP_BIND_ADDR` (default `127.0.0.1:3000`).

use payslip_engine::api::{create_router, AppState};
use payslip_engine::config::ConfigLoader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        std::env::var("PAYSLIP_CONFIG_DIR").unwrap_or_else(|_| "config/ato".to_string());
    let addr =
        std::env::var("PAYSLIP_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

    let config = ConfigLoader::load(&config_dir).map_err(|e| {
        tracing::error!("Failed to load configuration from {}: {}", config_dir, e);
        e
    })?;
    tracing::info!(
        config_dir = %config_dir,
        financial_year = %config.financial_year(),
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Payslip engine listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
