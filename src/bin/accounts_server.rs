//! Accounts Service - application entry point.
//!
//! REST API server for bank accounts and movements: account CRUD,
//! deposits/withdrawals with balance tracking, last-movement deletion,
//! and the movement report. Also receives signed client events from the
//! clients service to keep its local client replica current.
//!
//! # Startup Flow
//!
//! 1. Load configuration from `ACCOUNTS_*` environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

use banking_services::{accounts, config::AccountsConfig, db};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG, defaults to "info"
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AccountsConfig::from_env()?;
    tracing::info!("Configuration loaded");

    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    db::run_accounts_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    let addr = format!("0.0.0.0:{}", config.server_port);
    let app = accounts::routes::router(accounts::AppState { pool, config });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Accounts server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
