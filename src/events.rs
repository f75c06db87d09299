//! Client event payloads exchanged between the two services.
//!
//! The clients server publishes these on registration and deletion; the
//! accounts server consumes them to keep its local client replica current.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event type emitted when a client is registered.
pub const CLIENT_CREATED: &str = "client.created";

/// Event type emitted when a client is deleted.
pub const CLIENT_DELETED: &str = "client.deleted";

/// A client lifecycle event.
///
/// # JSON Example
///
/// ```json
/// {
///   "event_id": "770e8400-e29b-41d4-a716-446655440002",
///   "event_type": "client.created",
///   "occurred_at": "2025-06-01T12:00:00Z",
///   "client": {
///     "client_id": "jlema",
///     "name": "Jose Lema",
///     "active": true
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientEvent {
    /// Unique identifier for this event
    pub event_id: Uuid,

    /// One of [`CLIENT_CREATED`] / [`CLIENT_DELETED`]
    pub event_type: String,

    /// When the event was produced
    pub occurred_at: DateTime<Utc>,

    /// The client the event refers to
    pub client: ClientEventData,
}

/// Client fields carried by an event.
///
/// For deletion events these are the last known values of the removed row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientEventData {
    pub client_id: String,
    pub name: String,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_round_trips_through_json() {
        let event = ClientEvent {
            event_id: Uuid::new_v4(),
            event_type: CLIENT_CREATED.to_string(),
            occurred_at: Utc::now(),
            client: ClientEventData {
                client_id: "jlema".to_string(),
                name: "Jose Lema".to_string(),
                active: true,
            },
        };

        let json = serde_json::to_string(&event).unwrap();
        let parsed: ClientEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.event_id, event.event_id);
        assert_eq!(parsed.event_type, CLIENT_CREATED);
        assert_eq!(parsed.client.client_id, "jlema");
        assert!(parsed.client.active);
    }

    #[test]
    fn event_json_uses_expected_field_names() {
        let event = ClientEvent {
            event_id: Uuid::new_v4(),
            event_type: CLIENT_DELETED.to_string(),
            occurred_at: Utc::now(),
            client: ClientEventData {
                client_id: "mmontalvo".to_string(),
                name: "Marianela Montalvo".to_string(),
                active: false,
            },
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event_type"], "client.deleted");
        assert_eq!(value["client"]["client_id"], "mmontalvo");
        assert!(value.get("occurred_at").is_some());
    }
}
