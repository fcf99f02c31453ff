//! Authors repository

use sqlx::{any::AnyRow, AnyPool, Row};

use crate::{
    error::{AppError, AppResult},
    models::author::{Author, CreateAuthor, UpdateAuthor},
};

use super::get_nullable;

fn map_author(row: &AnyRow) -> AppResult<Author> {
    Ok(Author {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        bio: get_nullable(row, "bio")?,
    })
}

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: AnyPool,
}

impl AuthorsRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// List all authors
    pub async fn list(&self) -> AppResult<Vec<Author>> {
        let rows = sqlx::query("SELECT * FROM authors ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(map_author).collect()
    }

    /// Get author by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Author> {
        let row = sqlx::query("SELECT * FROM authors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))?;
        map_author(&row)
    }

    /// Create a new author
    pub async fn create(&self, author: &CreateAuthor) -> AppResult<Author> {
        let row = sqlx::query("INSERT INTO authors (name, bio) VALUES ($1, $2) RETURNING *")
            .bind(&author.name)
            .bind(&author.bio)
            .fetch_one(&self.pool)
            .await?;
        map_author(&row)
    }

    /// Update an existing author
    pub async fn update(&self, id: i64, author: &UpdateAuthor) -> AppResult<Author> {
        let row = sqlx::query(
            r#"
            UPDATE authors SET
                name = COALESCE($1, name),
                bio = COALESCE($2, bio)
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(author.name.as_deref())
        .bind(author.bio.as_deref())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))?;
        map_author(&row)
    }

    /// Delete an author
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Author {} not found", id)));
        }
        Ok(())
    }
}
