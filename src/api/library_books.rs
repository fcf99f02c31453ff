//! Library book (physical copy) endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::library_book::{CreateLibraryBook, LibraryBook, UpdateLibraryBook},
};

/// List all library copies
#[utoipa::path(
    get,
    path = "/library_books",
    tag = "library_books",
    responses(
        (status = 200, description = "Library copies list", body = Vec<LibraryBook>)
    )
)]
pub async fn list_library_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<LibraryBook>>> {
    let copies = state.repository.library_books.list().await?;
    Ok(Json(copies))
}

/// Register a physical copy of a book
#[utoipa::path(
    post,
    path = "/library_books",
    tag = "library_books",
    request_body = CreateLibraryBook,
    responses(
        (status = 201, description = "Library copy created", body = LibraryBook),
        (status = 404, description = "Referenced book not found")
    )
)]
pub async fn create_library_book(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateLibraryBook>,
) -> AppResult<(StatusCode, Json<LibraryBook>)> {
    let copy = state.repository.library_books.create(&data).await?;
    Ok((StatusCode::CREATED, Json(copy)))
}

/// Get library copy by ID
#[utoipa::path(
    get,
    path = "/library_books/{id}",
    tag = "library_books",
    params(("id" = i64, Path, description = "Library book ID")),
    responses(
        (status = 200, description = "Library copy details", body = LibraryBook),
        (status = 404, description = "Library copy not found")
    )
)]
pub async fn get_library_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<LibraryBook>> {
    let copy = state.repository.library_books.get_by_id(id).await?;
    Ok(Json(copy))
}

/// Update a library copy
#[utoipa::path(
    put,
    path = "/library_books/{id}",
    tag = "library_books",
    params(("id" = i64, Path, description = "Library book ID")),
    request_body = UpdateLibraryBook,
    responses(
        (status = 200, description = "Library copy updated", body = LibraryBook),
        (status = 404, description = "Library copy not found")
    )
)]
pub async fn update_library_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateLibraryBook>,
) -> AppResult<Json<LibraryBook>> {
    let copy = state.repository.library_books.update(id, &data).await?;
    Ok(Json(copy))
}

/// Delete a library copy
#[utoipa::path(
    delete,
    path = "/library_books/{id}",
    tag = "library_books",
    params(("id" = i64, Path, description = "Library book ID")),
    responses(
        (status = 204, description = "Library copy deleted"),
        (status = 404, description = "Library copy not found")
    )
)]
pub async fn delete_library_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.repository.library_books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
