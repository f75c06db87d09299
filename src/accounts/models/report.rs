//! Movement report types.
//!
//! The report joins movements with their account and the owning client,
//! producing one formatted row per movement in the requested date range.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Date format used for report rows, e.g. `01/06/2025 12:30:00`.
pub const REPORT_DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Query parameters for `GET /api/v1/reports`.
///
/// `from` and `to` are RFC 3339 datetimes bounding the movement dates,
/// inclusive on both ends.
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub client_id: String,

    pub from: DateTime<Utc>,

    pub to: DateTime<Utc>,
}

/// Raw joined row as fetched from the database.
#[derive(Debug, sqlx::FromRow)]
pub struct ReportRow {
    pub movement_date: DateTime<Utc>,
    pub client_name: String,
    pub account_number: String,
    pub account_type: String,
    pub previous_balance: Decimal,
    pub active: bool,
    pub amount: Decimal,
    pub balance: Decimal,
}

/// One formatted report row returned to the caller.
///
/// # JSON Example
///
/// ```json
/// {
///   "date": "01/06/2025 12:30:00",
///   "client": "Jose Lema",
///   "account_number": "478758",
///   "account_type": "savings",
///   "initial_balance": "2000",
///   "active": true,
///   "amount": "-575",
///   "available_balance": "1425"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ReportEntry {
    pub date: String,
    pub client: String,
    pub account_number: String,
    pub account_type: String,
    /// Account balance before the movement
    pub initial_balance: Decimal,
    pub active: bool,
    /// Signed movement amount
    pub amount: Decimal,
    /// Account balance after the movement
    pub available_balance: Decimal,
}

impl From<ReportRow> for ReportEntry {
    fn from(row: ReportRow) -> Self {
        Self {
            date: row.movement_date.format(REPORT_DATE_FORMAT).to_string(),
            client: row.client_name,
            account_number: row.account_number,
            account_type: row.account_type,
            initial_balance: row.previous_balance,
            active: row.active,
            amount: row.amount,
            available_balance: row.balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn report_rows_format_dates_day_first() {
        let row = ReportRow {
            movement_date: Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap(),
            client_name: "Jose Lema".to_string(),
            account_number: "478758".to_string(),
            account_type: "savings".to_string(),
            previous_balance: dec!(2000),
            active: true,
            amount: dec!(-575),
            balance: dec!(1425),
        };

        let entry = ReportEntry::from(row);

        assert_eq!(entry.date, "01/06/2025 12:30:00");
        assert_eq!(entry.client, "Jose Lema");
        assert_eq!(entry.initial_balance, dec!(2000));
        assert_eq!(entry.available_balance, dec!(1425));
    }

    #[test]
    fn single_digit_fields_are_zero_padded() {
        let row = ReportRow {
            movement_date: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
            client_name: "Marianela Montalvo".to_string(),
            account_number: "225487".to_string(),
            account_type: "checking".to_string(),
            previous_balance: dec!(100),
            active: true,
            amount: dec!(600),
            balance: dec!(700),
        };

        assert_eq!(ReportEntry::from(row).date, "02/01/2025 03:04:05");
    }
}
