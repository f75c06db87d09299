//! Account data models and API request/response types.
//!
//! This module defines:
//! - `Account`: database entity representing a bank account
//! - `CreateAccountRequest` / `UpdateAccountRequest`: request bodies
//! - `AccountResponse`: response body returned to clients

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Recognized account types, stored lowercase in the database.
pub const ACCOUNT_TYPES: [&str; 2] = ["savings", "checking"];

/// Normalize a raw account type to its stored form.
///
/// Matching is case insensitive; unrecognized values yield `None`.
pub fn normalize_account_type(raw: &str) -> Option<String> {
    let lowered = raw.to_ascii_lowercase();
    ACCOUNT_TYPES.contains(&lowered.as_str()).then_some(lowered)
}

/// Represents an account record from the database.
///
/// # Balance Storage
///
/// Balances are NUMERIC columns mapped to `rust_decimal::Decimal`, so
/// arithmetic is exact. `initial_balance` is the opening balance and never
/// changes; `balance` is the running balance updated by movements.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Account {
    /// Unique identifier for this account
    pub id: Uuid,

    /// Externally visible account number
    pub account_number: String,

    /// `savings` or `checking`
    pub account_type: String,

    /// Opening balance, fixed at creation
    pub initial_balance: Decimal,

    /// Current balance
    pub balance: Decimal,

    /// Inactive accounts reject new movements
    pub active: bool,

    /// Foreign key into the local client replica
    pub client_ref: Uuid,

    pub created_at: DateTime<Utc>,

    /// Timestamp of the last balance or status update
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a new account.
///
/// # JSON Example
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
/// # Validation
///
/// - `account_number`: required, must not already exist
/// - `account_type`: optional, `savings` (default) or `checking`
/// - `client_id`: required, must be a known client
/// - `initial_balance`: optional, defaults to 0, must not be negative
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub account_number: String,

    #[serde(default = "default_account_type")]
    pub account_type: String,

    /// Natural identifier of the owning client
    pub client_id: String,

    #[serde(default)]
    pub initial_balance: Decimal,
}

fn default_account_type() -> String {
    "savings".to_string()
}

/// Request body for updating an account.
///
/// Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub account_type: Option<String>,

    pub active: Option<bool>,
}

/// Response body for account endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "account_number": "478758",
///   "account_type": "savings",
///   "initial_balance": "2000",
///   "balance": "1425",
///   "active": true,
///   "created_at": "2025-06-01T10:00:00Z",
///   "updated_at": "2025-06-01T10:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub account_number: String,
    pub account_type: String,
    pub initial_balance: Decimal,
    pub balance: Decimal,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Convert database Account to API AccountResponse.
///
/// Drops the internal `client_ref` foreign key.
impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            account_number: account.account_number,
            account_type: account.account_type,
            initial_balance: account.initial_balance,
            balance: account.balance,
            active: account.active,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_types_normalize_case_insensitively() {
        assert_eq!(normalize_account_type("savings").as_deref(), Some("savings"));
        assert_eq!(normalize_account_type("Checking").as_deref(), Some("checking"));
        assert_eq!(normalize_account_type("SAVINGS").as_deref(), Some("savings"));
    }

    #[test]
    fn unknown_account_types_are_rejected() {
        assert!(normalize_account_type("current").is_none());
        assert!(normalize_account_type("").is_none());
    }

    #[test]
    fn create_request_defaults_type_and_balance() {
        let request: CreateAccountRequest = serde_json::from_str(
            r#"{"account_number": "478758", "client_id": "jlema"}"#,
        )
        .unwrap();

        assert_eq!(request.account_type, "savings");
        assert_eq!(request.initial_balance, Decimal::ZERO);
    }
}
