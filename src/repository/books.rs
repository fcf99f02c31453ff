//! Books repository

use sqlx::{any::AnyRow, AnyPool, Row};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
};

use super::get_nullable;

fn map_book(row: &AnyRow) -> AppResult<Book> {
    Ok(Book {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        isbn: get_nullable(row, "isbn")?,
        published_year: get_nullable(row, "published_year")?,
        author_id: row.try_get("author_id")?,
    })
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: AnyPool,
}

impl BooksRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query("SELECT * FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(map_book).collect()
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        let row = sqlx::query("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;
        map_book(&row)
    }

    /// Create a new book
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        self.ensure_author_exists(book.author_id).await?;

        let row = sqlx::query(
            r#"
            INSERT INTO books (title, isbn, published_year, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&book.title)
        .bind(&book.isbn)
        .bind(book.published_year)
        .bind(book.author_id)
        .fetch_one(&self.pool)
        .await?;
        map_book(&row)
    }

    /// Update an existing book
    pub async fn update(&self, id: i64, book: &UpdateBook) -> AppResult<Book> {
        if let Some(author_id) = book.author_id {
            self.ensure_author_exists(author_id).await?;
        }

        let row = sqlx::query(
            r#"
            UPDATE books SET
                title = COALESCE($1, title),
                isbn = COALESCE($2, isbn),
                published_year = COALESCE($3, published_year),
                author_id = COALESCE($4, author_id)
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(book.title.as_deref())
        .bind(book.isbn.as_deref())
        .bind(book.published_year)
        .bind(book.author_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;
        map_book(&row)
    }

    /// Delete a book
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }

    async fn ensure_author_exists(&self, author_id: i64) -> AppResult<()> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors WHERE id = $1")
            .bind(author_id)
            .fetch_one(&self.pool)
            .await?;
        if count == 0 {
            return Err(AppError::NotFound(format!("Author {} not found", author_id)));
        }
        Ok(())
    }
}
