//! Author endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::author::{Author, CreateAuthor, UpdateAuthor},
};

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "Authors list", body = Vec<Author>)
    )
)]
pub async fn list_authors(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Author>>> {
    let authors = state.repository.authors.list().await?;
    Ok(Json(authors))
}

/// Create an author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = CreateAuthor,
    responses(
        (status = 201, description = "Author created", body = Author)
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateAuthor>,
) -> AppResult<(StatusCode, Json<Author>)> {
    let author = state.repository.authors.create(&data).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

/// Get author by ID
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author details", body = Author),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Author>> {
    let author = state.repository.authors.get_by_id(id).await?;
    Ok(Json(author))
}

/// Update an author
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    request_body = UpdateAuthor,
    responses(
        (status = 200, description = "Author updated", body = Author),
        (status = 404, description = "Author not found")
    )
)]
pub async fn update_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateAuthor>,
) -> AppResult<Json<Author>> {
    let author = state.repository.authors.update(id, &data).await?;
    Ok(Json(author))
}

/// Delete an author
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    responses(
        (status = 204, description = "Author deleted"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn delete_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.repository.authors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
