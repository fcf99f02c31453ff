//! Loans repository

use chrono::{DateTime, Utc};
use sqlx::{any::AnyRow, AnyPool, Row};

use crate::{
    error::{AppError, AppResult},
    models::loan::{CreateLoan, Loan, LoanRow, UpdateLoan},
};

use super::get_nullable;

fn map_loan(row: &AnyRow) -> AppResult<Loan> {
    LoanRow {
        id: row.try_get("id")?,
        member_id: row.try_get("member_id")?,
        library_book_id: row.try_get("library_book_id")?,
        loan_date: row.try_get("loan_date")?,
        due_date: get_nullable(row, "due_date")?,
        returned_date: get_nullable(row, "returned_date")?,
    }
    .try_into()
}

#[derive(Clone)]
pub struct LoansRepository {
    pool: AnyPool,
}

impl LoansRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// List all loans
    pub async fn list(&self) -> AppResult<Vec<Loan>> {
        let rows = sqlx::query("SELECT * FROM loans ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(map_loan).collect()
    }

    /// Get loan by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Loan> {
        let row = sqlx::query("SELECT * FROM loans WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Loan {} not found", id)))?;
        map_loan(&row)
    }

    /// Create a new loan, dated now
    pub async fn create(&self, loan: &CreateLoan) -> AppResult<Loan> {
        self.ensure_member_exists(loan.member_id).await?;
        self.ensure_copy_exists(loan.library_book_id).await?;

        let now = Utc::now();
        let row = sqlx::query(
            r#"
            INSERT INTO loans (member_id, library_book_id, loan_date, due_date)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(loan.member_id)
        .bind(loan.library_book_id)
        .bind(now.to_rfc3339())
        .bind(loan.due_date.as_ref().map(DateTime::to_rfc3339))
        .fetch_one(&self.pool)
        .await?;
        map_loan(&row)
    }

    /// Update an existing loan's due or returned date
    pub async fn update(&self, id: i64, loan: &UpdateLoan) -> AppResult<Loan> {
        let row = sqlx::query(
            r#"
            UPDATE loans SET
                due_date = COALESCE($1, due_date),
                returned_date = COALESCE($2, returned_date)
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(loan.due_date.as_ref().map(DateTime::to_rfc3339))
        .bind(loan.returned_date.as_ref().map(DateTime::to_rfc3339))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Loan {} not found", id)))?;
        map_loan(&row)
    }

    /// Delete a loan
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM loans WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Loan {} not found", id)));
        }
        Ok(())
    }

    async fn ensure_member_exists(&self, member_id: i64) -> AppResult<()> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM members WHERE id = $1")
            .bind(member_id)
            .fetch_one(&self.pool)
            .await?;
        if count == 0 {
            return Err(AppError::NotFound(format!("Member {} not found", member_id)));
        }
        Ok(())
    }

    async fn ensure_copy_exists(&self, library_book_id: i64) -> AppResult<()> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM library_books WHERE id = $1")
            .bind(library_book_id)
            .fetch_one(&self.pool)
            .await?;
        if count == 0 {
            return Err(AppError::NotFound(format!(
                "Library book {} not found",
                library_book_id
            )));
        }
        Ok(())
    }
}
