//! Router construction for the clients server.

use crate::clients::{AppState, handlers};
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

/// Build the clients server router.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health::health_check))
        // Client management routes
        .route("/api/v1/clients", get(handlers::clients::list_clients))
        .route("/api/v1/clients", post(handlers::clients::register_client))
        .route("/api/v1/clients", put(handlers::clients::update_client))
        .route(
            "/api/v1/clients/{client_id}",
            get(handlers::clients::get_client),
        )
        .route(
            "/api/v1/clients/{client_id}",
            delete(handlers::clients::delete_client),
        )
        // Request tracing for observability
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
