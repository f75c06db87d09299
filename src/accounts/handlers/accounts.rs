//! Account management HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - POST /api/v1/accounts - Create new account
//! - GET /api/v1/accounts - List accounts
//! - GET /api/v1/accounts/:number - Get account by number
//! - PUT /api/v1/accounts/:number - Update type/status
//! - DELETE /api/v1/accounts/:number - Delete account and its movements

use crate::{
    accounts::AppState,
    accounts::models::account::{
        Account, AccountResponse, CreateAccountRequest, UpdateAccountRequest, normalize_account_type,
    },
    error::AppError,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Create a new account.
///
/// # Request Body
///
/// ```json
/// {
///   "account_number": "478758",
///   "account_type": "savings",
///   "client_id": "jlema",
///   "initial_balance": "2000"
/// }
/// ```
///
/// The owning client must already be known to this service (it arrives
/// through client events); the current balance starts equal to the
/// initial balance.
///
/// # Errors
///
/// - **400**: unrecognized account type or negative initial balance
/// - **404**: unknown client
/// - **422**: account number already taken
pub async fn create_account(
    State(state): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<Json<AccountResponse>, AppError> {
    let account_type = normalize_account_type(&request.account_type).ok_or_else(|| {
        AppError::InvalidRequest("account_type must be savings or checking".to_string())
    })?;

    if request.initial_balance < Decimal::ZERO {
        return Err(AppError::InvalidRequest(
            "initial_balance must not be negative".to_string(),
        ));
    }

    // Resolve the owning client in the local replica
    let client_ref: Uuid = sqlx::query_scalar("SELECT id FROM clients WHERE client_id = $1")
        .bind(&request.client_id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::ClientNotFound)?;

    let account = sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO accounts (account_number, account_type, initial_balance, balance, client_ref)
        VALUES ($1, $2, $3, $3, $4)
        RETURNING *
        "#,
    )
    .bind(&request.account_number)
    .bind(&account_type)
    .bind(request.initial_balance)
    .bind(client_ref)
    .fetch_one(&state.pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            AppError::AccountExists(request.account_number.clone())
        }
        other => AppError::Database(other),
    })?;

    Ok(Json(account.into()))
}

/// List all accounts, newest first.
pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountResponse>>, AppError> {
    let accounts =
        sqlx::query_as::<_, Account>("SELECT * FROM accounts ORDER BY created_at DESC")
            .fetch_all(&state.pool)
            .await?;

    let responses: Vec<AccountResponse> = accounts.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}

/// Get a specific account by account number.
///
/// Returns 404 if no account carries the number.
pub async fn get_account(
    State(state): State<AppState>,
    Path(account_number): Path<String>,
) -> Result<Json<AccountResponse>, AppError> {
    let account =
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE account_number = $1")
            .bind(&account_number)
            .fetch_optional(&state.pool)
            .await?
            .ok_or(AppError::AccountNotFound)?;

    Ok(Json(account.into()))
}

/// Update an account's type and/or active flag.
///
/// Absent fields are left unchanged. The balance is never updated here;
/// it only moves through movements.
pub async fn update_account(
    State(state): State<AppState>,
    Path(account_number): Path<String>,
    Json(request): Json<UpdateAccountRequest>,
) -> Result<Json<AccountResponse>, AppError> {
    let account_type = match request.account_type.as_deref() {
        Some(raw) => Some(normalize_account_type(raw).ok_or_else(|| {
            AppError::InvalidRequest("account_type must be savings or checking".to_string())
        })?),
        None => None,
    };

    let account = sqlx::query_as::<_, Account>(
        r#"
        UPDATE accounts
        SET account_type = COALESCE($1, account_type),
            active = COALESCE($2, active),
            updated_at = NOW()
        WHERE account_number = $3
        RETURNING *
        "#,
    )
    .bind(account_type)
    .bind(request.active)
    .bind(&account_number)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::AccountNotFound)?;

    Ok(Json(account.into()))
}

/// Delete an account.
///
/// Its movements are removed by the foreign-key cascade.
pub async fn delete_account(
    State(state): State<AppState>,
    Path(account_number): Path<String>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM accounts WHERE account_number = $1")
        .bind(&account_number)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::AccountNotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
