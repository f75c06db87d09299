//! Local client replica.
//!
//! The accounts service does not own client registration; it keeps this
//! replica of the clients service's data, updated through signed client
//! events, so account creation and reports can resolve client names
//! without a cross-service call.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A replicated client row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Client {
    pub id: Uuid,

    /// Natural identifier assigned by the clients service
    pub client_id: String,

    pub name: String,

    pub active: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}
