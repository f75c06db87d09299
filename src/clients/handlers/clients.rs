//! Client HTTP handlers.
//!
//! This module implements the client-related API endpoints:
//! - GET /api/v1/clients - List clients
//! - GET /api/v1/clients/:client_id - Get client by identifier
//! - POST /api/v1/clients - Register a client
//! - PUT /api/v1/clients - Update a client
//! - DELETE /api/v1/clients/:client_id - Delete a client
//!
//! Register/update/delete answer 200 with a message even when the client
//! identifier is taken or unknown; only lookups fail hard with 404.

use crate::{
    clients::AppState,
    clients::models::client::{
        Client, ClientResponse, RegisterRequest, RegisterResponse, UpdateClientRequest,
    },
    clients::services::registration_service,
    error::AppError,
};
use axum::{
    Json,
    extract::{Path, State},
};

/// List all registered clients, newest first.
pub async fn list_clients(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClientResponse>>, AppError> {
    let clients = sqlx::query_as::<_, Client>("SELECT * FROM clients ORDER BY created_at DESC")
        .fetch_all(&state.pool)
        .await?;

    let responses: Vec<ClientResponse> = clients.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}

/// Get a client by identifier.
///
/// Unlike the mutation endpoints this is a hard lookup: an unknown
/// identifier answers 404.
pub async fn get_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<Json<ClientResponse>, AppError> {
    let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE client_id = $1")
        .bind(&client_id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::ClientNotFound)?;

    Ok(Json(client.into()))
}

/// Register a new client.
///
/// # Request Body
///
/// ```json
/// {
///   "client_id": "jlema",
///   "password": "1234",
///   "name": "Jose Lema",
///   "address": "Otavalo sn y principal",
///   "phone": "098254785"
/// }
/// ```
///
/// # Response (200)
///
/// ```json
/// { "message": "Client registered successfully." }
/// ```
///
/// A taken identifier answers 200 with
/// `"Client jlema already exists."` and leaves the stored row unchanged.
pub async fn register_client(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    let response =
        registration_service::register_client(&state.pool, &state.publisher, request).await?;

    Ok(Json(response))
}

/// Update an existing client.
pub async fn update_client(
    State(state): State<AppState>,
    Json(request): Json<UpdateClientRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    let response = registration_service::update_client(&state.pool, request).await?;

    Ok(Json(response))
}

/// Delete a client by identifier.
pub async fn delete_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<Json<RegisterResponse>, AppError> {
    let response =
        registration_service::delete_client(&state.pool, &state.publisher, &client_id).await?;

    Ok(Json(response))
}
