//! Movement service - core balance logic for deposits and withdrawals.
//!
//! This service handles:
//! - Atomic balance updates
//! - Account status and movement type validation
//! - Insufficient-funds rejection
//! - Last-movement-only deletion with exact balance revert
//!
//! # Atomicity Guarantees
//!
//! Account balance updates and movement rows are written within a single
//! PostgreSQL transaction, with the account row locked `FOR UPDATE` for the
//! duration.

use crate::{
    accounts::models::{
        account::Account,
        movement::{Movement, MovementKind, MovementRequest},
    },
    db::DbPool,
    error::AppError,
};
use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Result of applying a movement to a balance.
#[derive(Debug, PartialEq, Eq)]
pub struct MovementOutcome {
    /// Signed amount to store: positive for deposits, negative for
    /// withdrawals
    pub amount: Decimal,

    /// Resulting account balance
    pub balance: Decimal,
}

/// Compute the signed amount and resulting balance for a movement.
///
/// The sign of the requested value is ignored; the movement kind decides
/// the direction. Withdrawals may not drive the balance below zero.
///
/// # Errors
///
/// - `InvalidRequest`: the value is zero
/// - `InsufficientFunds`: a withdrawal exceeds the current balance
pub fn apply_movement(
    kind: MovementKind,
    current_balance: Decimal,
    value: Decimal,
) -> Result<MovementOutcome, AppError> {
    let magnitude = value.abs();

    if magnitude.is_zero() {
        return Err(AppError::InvalidRequest(
            "Movement amount must be non-zero".to_string(),
        ));
    }

    let amount = match kind {
        MovementKind::Deposit => magnitude,
        MovementKind::Withdrawal => -magnitude,
    };

    let balance = current_balance + amount;

    if kind == MovementKind::Withdrawal && balance < Decimal::ZERO {
        return Err(AppError::InsufficientFunds);
    }

    Ok(MovementOutcome { amount, balance })
}

/// Create a movement against an account.
///
/// # Process
///
/// 1. Start database transaction
/// 2. Lock the account row and validate it is active
/// 3. Validate the movement type code and compute the new balance
/// 4. Persist the balance update and the movement row
/// 5. Commit (or rollback on error)
///
/// # Errors
///
/// - `AccountNotFound`: no account with the requested number
/// - `InactiveAccount`: the account is flagged inactive
/// - `InvalidMovementType`: type code is neither `C` nor `D`
/// - `InsufficientFunds`: a withdrawal exceeds the balance
/// - `Database`: database error occurred
pub async fn create_movement(
    pool: &DbPool,
    request: MovementRequest,
) -> Result<Movement, AppError> {
    let mut tx = pool.begin().await?;

    // FOR UPDATE keeps concurrent movements against the same account serial
    let account =
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE account_number = $1 FOR UPDATE")
            .bind(&request.account_number)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(AppError::AccountNotFound)?;

    if !account.active {
        tx.rollback().await?;
        return Err(AppError::InactiveAccount);
    }

    let kind = match MovementKind::parse_code(&request.movement_type) {
        Some(kind) => kind,
        None => {
            tx.rollback().await?;
            return Err(AppError::InvalidMovementType);
        }
    };

    let outcome = match apply_movement(kind, account.balance, request.amount) {
        Ok(outcome) => outcome,
        Err(e) => {
            tx.rollback().await?;
            return Err(e);
        }
    };

    sqlx::query("UPDATE accounts SET balance = $1, updated_at = NOW() WHERE id = $2")
        .bind(outcome.balance)
        .bind(account.id)
        .execute(&mut *tx)
        .await?;

    let description = format!("{} of {}", kind.label(), outcome.amount.abs());
    let created_at = request.date.unwrap_or_else(Utc::now);

    let movement = sqlx::query_as::<_, Movement>(
        r#"
        INSERT INTO movements (
            account_id,
            movement_type,
            description,
            previous_balance,
            amount,
            balance,
            created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(account.id)
    .bind(kind.code())
    .bind(&description)
    .bind(account.balance)
    .bind(outcome.amount)
    .bind(outcome.balance)
    .bind(created_at)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(movement)
}

/// Delete a movement, allowed only for the chronologically last movement
/// of its account.
///
/// Deletion reverts the account balance by subtracting the movement's
/// signed amount, which restores the pre-movement balance exactly for
/// deposits and withdrawals alike.
///
/// # Errors
///
/// - `MovementNotFound`: no movement with the requested id
/// - `NotLastMovement`: a newer movement exists for the account
/// - `Database`: database error occurred
pub async fn delete_movement(pool: &DbPool, movement_id: Uuid) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    let movement = sqlx::query_as::<_, Movement>("SELECT * FROM movements WHERE id = $1")
        .bind(movement_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::MovementNotFound)?;

    // Lock the owning account before touching its balance
    let account = sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE id = $1 FOR UPDATE")
        .bind(movement.account_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::AccountNotFound)?;

    let last_id: Uuid = sqlx::query_scalar(
        "SELECT id FROM movements WHERE account_id = $1 ORDER BY created_at DESC, id DESC LIMIT 1",
    )
    .bind(account.id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(AppError::MovementNotFound)?;

    if last_id != movement.id {
        tx.rollback().await?;
        return Err(AppError::NotLastMovement);
    }

    sqlx::query("UPDATE accounts SET balance = balance - $1, updated_at = NOW() WHERE id = $2")
        .bind(movement.amount)
        .bind(account.id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM movements WHERE id = $1")
        .bind(movement.id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(())
}

/// Get movement by ID.
pub async fn get_movement_by_id(
    pool: &DbPool,
    movement_id: Uuid,
) -> Result<Option<Movement>, AppError> {
    let movement = sqlx::query_as::<_, Movement>("SELECT * FROM movements WHERE id = $1")
        .bind(movement_id)
        .fetch_optional(pool)
        .await?;

    Ok(movement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn deposit_adds_value_to_balance() {
        let outcome = apply_movement(MovementKind::Deposit, dec!(100), dec!(600)).unwrap();

        assert_eq!(outcome.amount, dec!(600));
        assert_eq!(outcome.balance, dec!(700));
    }

    #[test]
    fn withdrawal_subtracts_value_from_balance() {
        let outcome = apply_movement(MovementKind::Withdrawal, dec!(2000), dec!(575)).unwrap();

        assert_eq!(outcome.amount, dec!(-575));
        assert_eq!(outcome.balance, dec!(1425));
    }

    #[test]
    fn withdrawal_beyond_balance_is_rejected() {
        // Balance 100, withdrawal of 150: insufficient funds
        let result = apply_movement(MovementKind::Withdrawal, dec!(100), dec!(150));

        assert!(matches!(result, Err(AppError::InsufficientFunds)));
    }

    #[test]
    fn withdrawal_down_to_exactly_zero_is_allowed() {
        let outcome = apply_movement(MovementKind::Withdrawal, dec!(150), dec!(150)).unwrap();

        assert_eq!(outcome.balance, Decimal::ZERO);
    }

    #[test]
    fn request_sign_is_ignored() {
        // Callers of the original system sent withdrawals as negative
        // values; both spellings must behave identically.
        let negative = apply_movement(MovementKind::Withdrawal, dec!(2000), dec!(-575)).unwrap();
        let positive = apply_movement(MovementKind::Withdrawal, dec!(2000), dec!(575)).unwrap();

        assert_eq!(negative, positive);

        let deposit = apply_movement(MovementKind::Deposit, dec!(100), dec!(-600)).unwrap();
        assert_eq!(deposit.balance, dec!(700));
    }

    #[test]
    fn zero_value_movements_are_rejected() {
        for kind in [MovementKind::Deposit, MovementKind::Withdrawal] {
            let result = apply_movement(kind, dec!(100), Decimal::ZERO);
            assert!(matches!(result, Err(AppError::InvalidRequest(_))));
        }
    }

    #[test]
    fn subtracting_stored_amount_reverts_the_balance() {
        // Deleting the last movement reverts the balance exactly because
        // stored amounts are signed.
        for (kind, value) in [
            (MovementKind::Deposit, dec!(600)),
            (MovementKind::Withdrawal, dec!(575)),
        ] {
            let before = dec!(2000);
            let outcome = apply_movement(kind, before, value).unwrap();
            assert_eq!(outcome.balance - outcome.amount, before);
        }
    }
}
