//! Book endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Books list", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.repository.books.list().await?;
    Ok(Json(books))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 404, description = "Referenced author not found")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.repository.books.create(&data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Book>> {
    let book = state.repository.books.get_by_id(id).await?;
    Ok(Json(book))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateBook>,
) -> AppResult<Json<Book>> {
    let book = state.repository.books.update(id, &data).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.repository.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
