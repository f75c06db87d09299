//! Error types and HTTP error response handling.
//!
//! This module defines all hard application errors and how they are
//! converted into HTTP responses with appropriate status codes and JSON
//! bodies. Soft failures (client registration/update/deletion against a
//! missing or duplicate client) are not errors — they are ordinary
//! responses carrying a message, see `clients::models`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Database errors**: any sqlx::Error from database operations
/// - **Resource errors**: requested entities not found
/// - **Business rule errors**: inactive account, insufficient funds,
///   non-last movement deletion, duplicate account number
/// - **Validation errors**: invalid movement type or request data
/// - **Event errors**: client events with a bad signature
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested client does not exist.
    #[error("Client not found")]
    ClientNotFound,

    /// Requested account does not exist.
    #[error("Account not found")]
    AccountNotFound,

    /// Requested movement does not exist.
    #[error("Movement not found")]
    MovementNotFound,

    /// Movements are not allowed on an inactive account.
    #[error("Movements are not allowed on an inactive account")]
    InactiveAccount,

    /// Movement type was neither `C` (deposit) nor `D` (withdrawal).
    #[error("Invalid movement type: must be C (deposit) or D (withdrawal)")]
    InvalidMovementType,

    /// A withdrawal would drive the account balance below zero.
    #[error("Insufficient funds for the requested withdrawal")]
    InsufficientFunds,

    /// Only the chronologically last movement of an account can be deleted.
    #[error("Only the most recent movement of an account can be deleted")]
    NotLastMovement,

    /// An account with the requested account number already exists.
    #[error("Account {0} already exists")]
    AccountExists(String),

    /// Incoming client event carried a missing or invalid signature.
    #[error("Invalid event signature")]
    InvalidSignature,

    /// Request body or parameters are invalid.
    #[error("Invalid request")]
    InvalidRequest(String),
}

/// Convert AppError into an HTTP response.
///
/// Handlers return `Result<T, AppError>` and errors become JSON bodies:
///
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - not-found variants → 404
/// - `InvalidMovementType`, `InvalidRequest` → 400
/// - `InactiveAccount`, `InsufficientFunds`, `NotLastMovement`,
///   `AccountExists` → 422 Unprocessable Entity
/// - `InvalidSignature` → 401 Unauthorized
/// - `Database` → 500 Internal Server Error (details logged, hidden from
///   the client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::ClientNotFound => {
                (StatusCode::NOT_FOUND, "client_not_found", self.to_string())
            }
            AppError::AccountNotFound => {
                (StatusCode::NOT_FOUND, "account_not_found", self.to_string())
            }
            AppError::MovementNotFound => (
                StatusCode::NOT_FOUND,
                "movement_not_found",
                self.to_string(),
            ),
            AppError::InactiveAccount => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "inactive_account",
                self.to_string(),
            ),
            AppError::InvalidMovementType => (
                StatusCode::BAD_REQUEST,
                "invalid_movement_type",
                self.to_string(),
            ),
            AppError::InsufficientFunds => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "insufficient_funds",
                self.to_string(),
            ),
            AppError::NotLastMovement => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "not_last_movement",
                self.to_string(),
            ),
            AppError::AccountExists(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "account_exists",
                self.to_string(),
            ),
            AppError::InvalidSignature => (
                StatusCode::UNAUTHORIZED,
                "invalid_signature",
                self.to_string(),
            ),
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::Database(ref e) => {
                tracing::error!("database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_variants_map_to_404() {
        for err in [
            AppError::ClientNotFound,
            AppError::AccountNotFound,
            AppError::MovementNotFound,
        ] {
            assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn business_rule_violations_map_to_422() {
        for err in [
            AppError::InactiveAccount,
            AppError::InsufficientFunds,
            AppError::NotLastMovement,
            AppError::AccountExists("478758".to_string()),
        ] {
            assert_eq!(
                err.into_response().status(),
                StatusCode::UNPROCESSABLE_ENTITY
            );
        }
    }

    #[test]
    fn validation_errors_map_to_400() {
        assert_eq!(
            AppError::InvalidMovementType.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidRequest("bad".to_string())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn bad_signature_maps_to_401() {
        assert_eq!(
            AppError::InvalidSignature.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
