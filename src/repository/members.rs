//! Members repository

use sqlx::AnyPool;

use crate::{
    error::{AppError, AppResult},
    models::member::{CreateMember, Member, UpdateMember},
};

#[derive(Clone)]
pub struct MembersRepository {
    pool: AnyPool,
}

impl MembersRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// List all members
    pub async fn list(&self) -> AppResult<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>("SELECT * FROM members ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(members)
    }

    /// Get member by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Member> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))
    }

    /// Create a new member
    pub async fn create(&self, member: &CreateMember) -> AppResult<Member> {
        let row = sqlx::query_as::<_, Member>(
            "INSERT INTO members (name, email) VALUES ($1, $2) RETURNING *",
        )
        .bind(&member.name)
        .bind(&member.email)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update an existing member
    pub async fn update(&self, id: i64, member: &UpdateMember) -> AppResult<Member> {
        sqlx::query_as::<_, Member>(
            r#"
            UPDATE members SET
                name = COALESCE($1, name),
                email = COALESCE($2, email)
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(member.name.as_deref())
        .bind(member.email.as_deref())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))
    }

    /// Delete a member
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Member {} not found", id)));
        }
        Ok(())
    }
}
