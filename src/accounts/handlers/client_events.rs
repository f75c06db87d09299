//! Client event intake.
//!
//! The clients server publishes a signed JSON event whenever a client is
//! registered or deleted. This handler verifies the signature over the raw
//! body before parsing, then applies the event to the local client
//! replica.

use crate::{
    accounts::AppState,
    accounts::models::client::Client,
    error::AppError,
    events::{self, ClientEvent},
    signing,
};
use axum::{body::Bytes, extract::State, http::HeaderMap, http::StatusCode};

/// Receive a client event from the clients service.
///
/// # Endpoint
///
/// `POST /internal/client-events`
///
/// # Headers
///
/// - `X-Event-Signature: sha256=<hex>` - HMAC-SHA256 over the raw body
/// - `X-Event-Id: <uuid>` - informational, logged only
///
/// # Behavior
///
/// - `client.created` upserts the replica row for the event's client
/// - `client.deleted` removes it; the foreign-key cascade also removes the
///   client's accounts and their movements
/// - unknown event types are acknowledged and ignored
///
/// # Errors
///
/// - **401**: missing or invalid signature
/// - **400**: body is not a client event
pub async fn receive_client_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let signature = headers
        .get(signing::SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::InvalidSignature)?;

    if !signing::verify(&state.config.event_secret, &body, signature) {
        return Err(AppError::InvalidSignature);
    }

    let event: ClientEvent = serde_json::from_slice(&body)
        .map_err(|e| AppError::InvalidRequest(format!("Malformed client event: {e}")))?;

    match event.event_type.as_str() {
        events::CLIENT_CREATED => {
            let client = sqlx::query_as::<_, Client>(
                r#"
                INSERT INTO clients (client_id, name, active)
                VALUES ($1, $2, $3)
                ON CONFLICT (client_id) DO UPDATE
                SET name = EXCLUDED.name,
                    active = EXCLUDED.active,
                    updated_at = NOW()
                RETURNING *
                "#,
            )
            .bind(&event.client.client_id)
            .bind(&event.client.name)
            .bind(event.client.active)
            .fetch_one(&state.pool)
            .await?;

            tracing::info!(
                "client {} ({}) replicated (event {})",
                client.client_id,
                client.name,
                event.event_id
            );
        }
        events::CLIENT_DELETED => {
            // Accounts and movements go with the replica row via cascade
            let deleted = sqlx::query_as::<_, Client>(
                "DELETE FROM clients WHERE client_id = $1 RETURNING *",
            )
            .bind(&event.client.client_id)
            .fetch_optional(&state.pool)
            .await?;

            match deleted {
                Some(client) => tracing::info!(
                    "client {} removed from replica (event {})",
                    client.client_id,
                    event.event_id
                ),
                None => tracing::warn!(
                    "deletion event {} for unknown client {}",
                    event.event_id,
                    event.client.client_id
                ),
            }
        }
        other => {
            tracing::warn!("ignoring client event with unknown type {other:?}");
        }
    }

    Ok(StatusCode::ACCEPTED)
}
