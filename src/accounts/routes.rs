//! Router construction for the accounts server.

use crate::accounts::{AppState, handlers};
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

/// Build the accounts server router.
///
/// All routes are public except `/internal/client-events`, which is
/// protected by the event signature rather than by routing.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health::health_check))
        // Account management routes
        .route("/api/v1/accounts", post(handlers::accounts::create_account))
        .route("/api/v1/accounts", get(handlers::accounts::list_accounts))
        .route(
            "/api/v1/accounts/{number}",
            get(handlers::accounts::get_account),
        )
        .route(
            "/api/v1/accounts/{number}",
            put(handlers::accounts::update_account),
        )
        .route(
            "/api/v1/accounts/{number}",
            delete(handlers::accounts::delete_account),
        )
        .route(
            "/api/v1/accounts/{number}/movements",
            get(handlers::movements::list_account_movements),
        )
        // Movement routes
        .route(
            "/api/v1/movements",
            post(handlers::movements::create_movement),
        )
        .route(
            "/api/v1/movements/{id}",
            get(handlers::movements::get_movement),
        )
        .route(
            "/api/v1/movements/{id}",
            delete(handlers::movements::delete_movement),
        )
        // Reports
        .route("/api/v1/reports", get(handlers::reports::movements_report))
        // Client replica sync
        .route(
            "/internal/client-events",
            post(handlers::client_events::receive_client_event),
        )
        // Request tracing for observability
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
