//! Movement report service.
//!
//! Joins movements with their account and the owning client over a date
//! range and formats the rows for the caller.

use crate::{
    accounts::models::report::{ReportEntry, ReportQuery, ReportRow},
    db::DbPool,
    error::AppError,
};

/// Build the movement report for a client and date range.
///
/// Rows are ordered by movement date. A client with no movements in the
/// range (or no accounts at all) yields an empty list rather than an
/// error.
pub async fn movements_report(
    pool: &DbPool,
    query: &ReportQuery,
) -> Result<Vec<ReportEntry>, AppError> {
    if query.from > query.to {
        return Err(AppError::InvalidRequest(
            "Report range start must not be after its end".to_string(),
        ));
    }

    let rows = sqlx::query_as::<_, ReportRow>(
        r#"
        SELECT m.created_at AS movement_date,
               c.name AS client_name,
               a.account_number,
               a.account_type,
               m.previous_balance,
               a.active,
               m.amount,
               m.balance
        FROM movements m
        JOIN accounts a ON a.id = m.account_id
        JOIN clients c ON c.id = a.client_ref
        WHERE c.client_id = $1
          AND m.created_at BETWEEN $2 AND $3
        ORDER BY m.created_at
        "#,
    )
    .bind(&query.client_id)
    .bind(query.from)
    .bind(query.to)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(ReportEntry::from).collect())
}
