//! Loan model and related types
//!
//! Loan dates are stored as RFC 3339 text so the same schema works on both
//! the embedded and the networked store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Loan row as stored in the database
#[derive(Debug, Clone)]
pub struct LoanRow {
    pub id: i64,
    pub member_id: i64,
    pub library_book_id: i64,
    pub loan_date: String,
    pub due_date: Option<String>,
    pub returned_date: Option<String>,
}

/// Loan model with parsed timestamps
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Loan {
    pub id: i64,
    pub member_id: i64,
    pub library_book_id: i64,
    pub loan_date: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
    pub returned_date: Option<DateTime<Utc>>,
}

fn parse_timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::Internal(format!("Malformed stored timestamp {value:?}: {e}")))
}

impl TryFrom<LoanRow> for Loan {
    type Error = AppError;

    fn try_from(row: LoanRow) -> AppResult<Self> {
        Ok(Loan {
            id: row.id,
            member_id: row.member_id,
            library_book_id: row.library_book_id,
            loan_date: parse_timestamp(&row.loan_date)?,
            due_date: row.due_date.as_deref().map(parse_timestamp).transpose()?,
            returned_date: row
                .returned_date
                .as_deref()
                .map(parse_timestamp)
                .transpose()?,
        })
    }
}

/// Create loan request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLoan {
    pub member_id: i64,
    pub library_book_id: i64,
    pub due_date: Option<DateTime<Utc>>,
}

/// Update loan request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateLoan {
    pub due_date: Option<DateTime<Utc>>,
    pub returned_date: Option<DateTime<Utc>>,
}
