//! Library book (physical copy) model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A physical copy of a book held by the library
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LibraryBook {
    pub id: i64,
    pub book_id: i64,
    pub barcode: Option<String>,
}

/// Create library book request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLibraryBook {
    pub book_id: i64,
    pub barcode: Option<String>,
}

/// Update library book request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateLibraryBook {
    pub book_id: Option<i64>,
    pub barcode: Option<String>,
}
