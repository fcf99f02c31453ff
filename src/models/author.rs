//! Author model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full author model from database
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub bio: Option<String>,
}

/// Create author request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAuthor {
    pub name: String,
    pub bio: Option<String>,
}

/// Update author request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAuthor {
    pub name: Option<String>,
    pub bio: Option<String>,
}
