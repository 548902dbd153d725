//! payroll-engine server binary.
//!
//! Loads the seed configuration from `PAYROLL_CONFIG_DIR` (default
//! `./config/avec`), builds an in-memory store from it, and serves the JSON
//! API on `PAYROLL_BIND_ADDR` (default `0.0.0.0:3000`).

use std::env;

use anyhow::Context as _;
use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;
use tokio::net::TcpListener;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/avec";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let config_dir =
        env::var("PAYROLL_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr =
        env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("failed to load configuration from {}", config_dir))?;
    info!(
        config_dir = %config_dir,
        employees = config.seed().employees.len(),
        "Configuration loaded"
    );

    let router = create_router(AppState::from_config(config));

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    info!(addr = %bind_addr, "Listening");

    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
