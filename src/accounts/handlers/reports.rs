//! Movement report handler.

use crate::{
    accounts::AppState,
    accounts::models::report::{ReportEntry, ReportQuery},
    accounts::services::report_service,
    error::AppError,
};
use axum::{
    Json,
    extract::{Query, State},
};

/// Build the movement report for a client over a date range.
///
/// # Endpoint
///
/// `GET /api/v1/reports?client_id=jlema&from=2025-06-01T00:00:00Z&to=2025-06-30T23:59:59Z`
///
/// Each row carries the formatted movement date, the client's name, the
/// account it hit, the balance before and after, and the signed amount.
pub async fn movements_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<Vec<ReportEntry>>, AppError> {
    let entries = report_service::movements_report(&state.pool, &query).await?;

    Ok(Json(entries))
}
