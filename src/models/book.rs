//! Book model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full book model from database
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub isbn: Option<String>,
    pub published_year: Option<i64>,
    pub author_id: i64,
}

/// Create book request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: String,
    pub isbn: Option<String>,
    pub published_year: Option<i64>,
    pub author_id: i64,
}

/// Update book request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub isbn: Option<String>,
    pub published_year: Option<i64>,
    pub author_id: Option<i64>,
}
