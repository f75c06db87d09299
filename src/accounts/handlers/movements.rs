//! Movement HTTP handlers.
//!
//! This module implements the movement-related API endpoints:
//! - POST /api/v1/movements - Apply a deposit or withdrawal
//! - GET /api/v1/movements/:id - Get movement details
//! - DELETE /api/v1/movements/:id - Delete the last movement of an account
//! - GET /api/v1/accounts/:number/movements - List an account's movements

use crate::{
    accounts::AppState,
    accounts::models::movement::{Movement, MovementRequest, MovementResponse},
    accounts::services::movement_service,
    error::AppError,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// Apply a deposit or withdrawal to an account.
///
/// # Request Body
///
/// ```json
/// {
///   "account_number": "478758",
///   "movement_type": "D",
///   "amount": "575"
/// }
/// ```
///
/// # Response (200)
///
/// ```json
/// {
///   "id": "770e8400-...",
///   "account_id": "550e8400-...",
///   "movement_type": "D",
///   "description": "Withdrawal of 575",
///   "previous_balance": "2000",
///   "amount": "-575",
///   "balance": "1425",
///   "created_at": "2025-06-01T12:30:00Z"
/// }
/// ```
pub async fn create_movement(
    State(state): State<AppState>,
    Json(request): Json<MovementRequest>,
) -> Result<Json<MovementResponse>, AppError> {
    let movement = movement_service::create_movement(&state.pool, request).await?;

    Ok(Json(movement.into()))
}

/// Get movement by ID.
pub async fn get_movement(
    State(state): State<AppState>,
    Path(movement_id): Path<Uuid>,
) -> Result<Json<MovementResponse>, AppError> {
    let movement = movement_service::get_movement_by_id(&state.pool, movement_id)
        .await?
        .ok_or(AppError::MovementNotFound)?;

    Ok(Json(movement.into()))
}

/// Delete a movement.
///
/// Only the chronologically last movement of its account can be deleted;
/// the account balance is reverted to its pre-movement value.
pub async fn delete_movement(
    State(state): State<AppState>,
    Path(movement_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    movement_service::delete_movement(&state.pool, movement_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List an account's movements, oldest first.
pub async fn list_account_movements(
    State(state): State<AppState>,
    Path(account_number): Path<String>,
) -> Result<Json<Vec<MovementResponse>>, AppError> {
    let account_id: Uuid = sqlx::query_scalar("SELECT id FROM accounts WHERE account_number = $1")
        .bind(&account_number)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::AccountNotFound)?;

    let movements = sqlx::query_as::<_, Movement>(
        "SELECT * FROM movements WHERE account_id = $1 ORDER BY created_at, id",
    )
    .bind(account_id)
    .fetch_all(&state.pool)
    .await?;

    let responses: Vec<MovementResponse> = movements.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}
