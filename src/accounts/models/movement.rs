//! Movement data models and API request/response types.
//!
//! A movement is a single deposit or withdrawal applied to an account.
//! Amounts are stored signed: positive for deposits, negative for
//! withdrawals, so reverting a movement is always a plain subtraction.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The two recognized movement kinds and their wire codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

impl MovementKind {
    /// Parse a request code (`C` for deposits, `D` for withdrawals),
    /// case insensitive. Anything else is not a movement kind.
    pub fn parse_code(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("C") {
            Some(MovementKind::Deposit)
        } else if raw.eq_ignore_ascii_case("D") {
            Some(MovementKind::Withdrawal)
        } else {
            None
        }
    }

    /// The code stored in the `movement_type` column.
    pub fn code(&self) -> &'static str {
        match self {
            MovementKind::Deposit => "C",
            MovementKind::Withdrawal => "D",
        }
    }

    /// Human-readable label used in movement descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            MovementKind::Deposit => "Deposit",
            MovementKind::Withdrawal => "Withdrawal",
        }
    }
}

/// Represents a movement record from the database.
///
/// Invariant per row: `balance = previous_balance + amount`, with `amount`
/// carrying the sign of the movement.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Movement {
    /// Unique identifier for this movement
    pub id: Uuid,

    /// Account the movement was applied to
    pub account_id: Uuid,

    /// `C` (deposit) or `D` (withdrawal)
    pub movement_type: String,

    /// Generated summary, e.g. `"Withdrawal of 575"`
    pub description: String,

    /// Account balance before this movement
    pub previous_balance: Decimal,

    /// Signed movement amount
    pub amount: Decimal,

    /// Account balance after this movement
    pub balance: Decimal,

    /// Movement date; client-supplied or the insertion time
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a movement.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_number": "478758",
///   "movement_type": "D",
///   "amount": "575",
///   "date": "2025-06-01T12:30:00Z"
/// }
/// ```
///
/// The amount's sign is ignored; the movement type decides the direction.
/// `date` is optional and defaults to the current time.
#[derive(Debug, Deserialize)]
pub struct MovementRequest {
    pub account_number: String,

    /// `C` (deposit) or `D` (withdrawal), case insensitive
    pub movement_type: String,

    pub amount: Decimal,

    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// Response body for movement endpoints.
#[derive(Debug, Serialize)]
pub struct MovementResponse {
    pub id: Uuid,
    pub account_id: Uuid,
    pub movement_type: String,
    pub description: String,
    pub previous_balance: Decimal,
    pub amount: Decimal,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<Movement> for MovementResponse {
    fn from(movement: Movement) -> Self {
        Self {
            id: movement.id,
            account_id: movement.account_id,
            movement_type: movement.movement_type,
            description: movement.description,
            previous_balance: movement.previous_balance,
            amount: movement.amount,
            balance: movement.balance,
            created_at: movement.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_codes_parse_case_insensitively() {
        assert_eq!(MovementKind::parse_code("C"), Some(MovementKind::Deposit));
        assert_eq!(MovementKind::parse_code("c"), Some(MovementKind::Deposit));
        assert_eq!(
            MovementKind::parse_code("D"),
            Some(MovementKind::Withdrawal)
        );
        assert_eq!(
            MovementKind::parse_code("d"),
            Some(MovementKind::Withdrawal)
        );
    }

    #[test]
    fn unrecognized_codes_are_rejected() {
        for raw in ["", "X", "CD", "deposit", "credit"] {
            assert_eq!(MovementKind::parse_code(raw), None, "code {raw:?}");
        }
    }

    #[test]
    fn codes_round_trip() {
        for kind in [MovementKind::Deposit, MovementKind::Withdrawal] {
            assert_eq!(MovementKind::parse_code(kind.code()), Some(kind));
        }
    }
}
