//! Library books (physical copies) repository

use sqlx::{any::AnyRow, AnyPool, Row};

use crate::{
    error::{AppError, AppResult},
    models::library_book::{CreateLibraryBook, LibraryBook, UpdateLibraryBook},
};

use super::get_nullable;

fn map_library_book(row: &AnyRow) -> AppResult<LibraryBook> {
    Ok(LibraryBook {
        id: row.try_get("id")?,
        book_id: row.try_get("book_id")?,
        barcode: get_nullable(row, "barcode")?,
    })
}

#[derive(Clone)]
pub struct LibraryBooksRepository {
    pool: AnyPool,
}

impl LibraryBooksRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// List all library copies
    pub async fn list(&self) -> AppResult<Vec<LibraryBook>> {
        let rows = sqlx::query("SELECT * FROM library_books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(map_library_book).collect()
    }

    /// Get library copy by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<LibraryBook> {
        let row = sqlx::query("SELECT * FROM library_books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Library book {} not found", id)))?;
        map_library_book(&row)
    }

    /// Create a new library copy
    pub async fn create(&self, copy: &CreateLibraryBook) -> AppResult<LibraryBook> {
        self.ensure_book_exists(copy.book_id).await?;

        let row = sqlx::query(
            "INSERT INTO library_books (book_id, barcode) VALUES ($1, $2) RETURNING *",
        )
        .bind(copy.book_id)
        .bind(&copy.barcode)
        .fetch_one(&self.pool)
        .await?;
        map_library_book(&row)
    }

    /// Update an existing library copy
    pub async fn update(&self, id: i64, copy: &UpdateLibraryBook) -> AppResult<LibraryBook> {
        if let Some(book_id) = copy.book_id {
            self.ensure_book_exists(book_id).await?;
        }

        let row = sqlx::query(
            r#"
            UPDATE library_books SET
                book_id = COALESCE($1, book_id),
                barcode = COALESCE($2, barcode)
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(copy.book_id)
        .bind(copy.barcode.as_deref())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Library book {} not found", id)))?;
        map_library_book(&row)
    }

    /// Delete a library copy
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM library_books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Library book {} not found", id)));
        }
        Ok(())
    }

    async fn ensure_book_exists(&self, book_id: i64) -> AppResult<()> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE id = $1")
            .bind(book_id)
            .fetch_one(&self.pool)
            .await?;
        if count == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", book_id)));
        }
        Ok(())
    }
}
