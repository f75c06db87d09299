//! Client data models and API request/response types.
//!
//! This module defines:
//! - `Client`: database entity representing a registered client
//! - `RegisterRequest` / `UpdateClientRequest`: request bodies
//! - `RegisterResponse`: soft-failure message envelope
//! - `ClientResponse`: response body returned to callers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a client record from the database.
///
/// The password is stored as a salted hash (`salt$digest`, hex encoded)
/// and never leaves the service.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Client {
    /// Unique identifier for this client row
    pub id: Uuid,

    /// Natural identifier chosen at registration, unique
    pub client_id: String,

    /// Salted SHA-256 hash of the registration password
    pub password_hash: String,

    pub name: String,

    pub gender: Option<String>,

    pub age: Option<i32>,

    pub identification: Option<String>,

    pub address: Option<String>,

    pub phone: Option<String>,

    pub active: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Request body for registering a new client.
///
/// # JSON Example
///
/// ```json
/// {
///   "client_id": "jlema",
///   "password": "1234",
///   "name": "Jose Lema",
///   "gender": "M",
///   "age": 34,
///   "identification": "098254785",
///   "address": "Otavalo sn y principal",
///   "phone": "098254785"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub client_id: String,

    pub password: String,

    pub name: String,

    pub gender: Option<String>,

    pub age: Option<i32>,

    pub identification: Option<String>,

    pub address: Option<String>,

    pub phone: Option<String>,
}

/// Request body for updating an existing client.
///
/// The password is not updatable through this request. Demographic fields
/// are overwritten as sent (absent optional fields clear the stored
/// value); `active` is left unchanged when absent.
#[derive(Debug, Deserialize)]
pub struct UpdateClientRequest {
    pub client_id: String,

    pub name: String,

    pub gender: Option<String>,

    pub age: Option<i32>,

    pub identification: Option<String>,

    pub address: Option<String>,

    pub phone: Option<String>,

    pub active: Option<bool>,
}

/// Message envelope for registration/update/deletion outcomes.
///
/// Duplicate registration and updates/deletions of a missing client are
/// soft failures: the handler answers 200 with a message instead of an
/// error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
}

impl RegisterResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for client endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "client_id": "jlema",
///   "name": "Jose Lema",
///   "gender": "M",
///   "age": 34,
///   "identification": "098254785",
///   "address": "Otavalo sn y principal",
///   "phone": "098254785",
///   "active": true,
///   "created_at": "2025-06-01T10:00:00Z",
///   "updated_at": "2025-06-01T10:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ClientResponse {
    pub id: Uuid,
    pub client_id: String,
    pub name: String,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub identification: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Convert database Client to API ClientResponse.
///
/// Drops the password hash.
impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            client_id: client.client_id,
            name: client.name,
            gender: client.gender,
            age: client.age,
            identification: client.identification,
            address: client.address,
            phone: client.phone,
            active: client.active,
            created_at: client.created_at,
            updated_at: client.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_response_carries_no_password_material() {
        let client = Client {
            id: Uuid::new_v4(),
            client_id: "jlema".to_string(),
            password_hash: "aa$bb".to_string(),
            name: "Jose Lema".to_string(),
            gender: Some("M".to_string()),
            age: Some(34),
            identification: None,
            address: None,
            phone: None,
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(ClientResponse::from(client)).unwrap();

        assert!(value.get("password_hash").is_none());
        assert!(value.get("password").is_none());
        assert_eq!(value["client_id"], "jlema");
    }

    #[test]
    fn register_request_tolerates_missing_optional_fields() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"client_id": "jlema", "password": "1234", "name": "Jose Lema"}"#,
        )
        .unwrap();

        assert_eq!(request.client_id, "jlema");
        assert!(request.gender.is_none());
        assert!(request.age.is_none());
    }
}
