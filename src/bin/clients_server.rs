//! Clients Service - application entry point.
//!
//! REST API server for client registration, update, and deletion. On
//! registration and deletion a signed `client.created` / `client.deleted`
//! event is published to the configured endpoint, fire-and-forget.
//!
//! # Startup Flow
//!
//! 1. Load configuration from `CLIENTS_*` environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Build the event publisher and HTTP router
//! 5. Start server on configured port

use banking_services::{
    clients::{self, services::event_publisher::EventPublisher},
    config::ClientsConfig,
    db,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG, defaults to "info"
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ClientsConfig::from_env()?;
    tracing::info!("Configuration loaded");

    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    db::run_clients_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    let publisher = EventPublisher::new(config.event_url.clone(), config.event_secret.clone())?;
    if config.event_url.is_none() {
        tracing::warn!("CLIENTS_EVENT_URL not set, client events will not be published");
    }

    let addr = format!("0.0.0.0:{}", config.server_port);
    let app = clients::routes::router(clients::AppState { pool, publisher });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Clients server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
