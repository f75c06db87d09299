//! Registration service - client registration, update, and deletion.
//!
//! Outcomes that depend only on whether the client identifier exists are
//! soft: the service answers with a [`RegisterResponse`] message and HTTP
//! 200 rather than an error, so callers can surface the text directly.
//! Registration and deletion additionally publish a client event,
//! fire-and-forget.

use crate::{
    clients::models::client::{Client, RegisterRequest, RegisterResponse, UpdateClientRequest},
    clients::password,
    clients::services::event_publisher::EventPublisher,
    db::DbPool,
    error::AppError,
};
use uuid::Uuid;

/// Register a new client.
///
/// # Process
///
/// 1. If the identifier is taken, answer with the already-exists message
///    (no new row, no event)
/// 2. Hash the password with a fresh salt
/// 3. Insert the client as active
/// 4. Publish `client.created` in the background
pub async fn register_client(
    pool: &DbPool,
    publisher: &EventPublisher,
    request: RegisterRequest,
) -> Result<RegisterResponse, AppError> {
    let existing: Option<Uuid> = sqlx::query_scalar("SELECT id FROM clients WHERE client_id = $1")
        .bind(&request.client_id)
        .fetch_optional(pool)
        .await?;

    if existing.is_some() {
        return Ok(RegisterResponse::new(format!(
            "Client {} already exists.",
            request.client_id
        )));
    }

    let password_hash = password::hash_password(&request.password);

    let client = sqlx::query_as::<_, Client>(
        r#"
        INSERT INTO clients (
            client_id,
            password_hash,
            name,
            gender,
            age,
            identification,
            address,
            phone,
            active
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, true)
        RETURNING *
        "#,
    )
    .bind(&request.client_id)
    .bind(&password_hash)
    .bind(&request.name)
    .bind(&request.gender)
    .bind(request.age)
    .bind(&request.identification)
    .bind(&request.address)
    .bind(&request.phone)
    .fetch_one(pool)
    .await?;

    publisher.publish_created(&client);

    Ok(RegisterResponse::new("Client registered successfully."))
}

/// Update an existing client's demographic data and active flag.
///
/// The password is left untouched. A missing client is a soft failure.
pub async fn update_client(
    pool: &DbPool,
    request: UpdateClientRequest,
) -> Result<RegisterResponse, AppError> {
    let updated = sqlx::query_as::<_, Client>(
        r#"
        UPDATE clients
        SET name = $1,
            gender = $2,
            age = $3,
            identification = $4,
            address = $5,
            phone = $6,
            active = COALESCE($7, active),
            updated_at = NOW()
        WHERE client_id = $8
        RETURNING *
        "#,
    )
    .bind(&request.name)
    .bind(&request.gender)
    .bind(request.age)
    .bind(&request.identification)
    .bind(&request.address)
    .bind(&request.phone)
    .bind(request.active)
    .bind(&request.client_id)
    .fetch_optional(pool)
    .await?;

    match updated {
        Some(_) => Ok(RegisterResponse::new(
            "Client information updated successfully.",
        )),
        None => Ok(RegisterResponse::new(format!(
            "Client {} does not exist.",
            request.client_id
        ))),
    }
}

/// Delete a client by identifier.
///
/// A missing client is a soft failure. On success a `client.deleted`
/// event is published with the removed row's last known data; the
/// accounts service reacts by dropping the client's accounts and
/// movements.
pub async fn delete_client(
    pool: &DbPool,
    publisher: &EventPublisher,
    client_id: &str,
) -> Result<RegisterResponse, AppError> {
    let deleted =
        sqlx::query_as::<_, Client>("DELETE FROM clients WHERE client_id = $1 RETURNING *")
            .bind(client_id)
            .fetch_optional(pool)
            .await?;

    match deleted {
        Some(client) => {
            publisher.publish_deleted(&client);
            Ok(RegisterResponse::new("Client deleted successfully."))
        }
        None => Ok(RegisterResponse::new(format!(
            "Client {client_id} does not exist."
        ))),
    }
}
