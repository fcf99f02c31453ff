//! Member model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Full member model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Create member request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMember {
    pub name: String,
    pub email: String,
}

/// Update member request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMember {
    pub name: Option<String>,
    pub email: Option<String>,
}
