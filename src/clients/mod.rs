//! Clients service: registration, update, deletion, event publishing.

pub mod handlers;
pub mod models;
pub mod password;
pub mod routes;
pub mod services;

use crate::{clients::services::event_publisher::EventPublisher, db::DbPool};

/// Shared state for the clients server, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub publisher: EventPublisher,
}
