//! Loan endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::loan::{CreateLoan, Loan, UpdateLoan},
};

/// List all loans
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    responses(
        (status = 200, description = "Loans list", body = Vec<Loan>)
    )
)]
pub async fn list_loans(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Loan>>> {
    let loans = state.repository.loans.list().await?;
    Ok(Json(loans))
}

/// Create a loan (borrow a copy)
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = CreateLoan,
    responses(
        (status = 201, description = "Loan created", body = Loan),
        (status = 404, description = "Member or library copy not found")
    )
)]
pub async fn create_loan(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateLoan>,
) -> AppResult<(StatusCode, Json<Loan>)> {
    let loan = state.repository.loans.create(&data).await?;
    Ok((StatusCode::CREATED, Json(loan)))
}

/// Get loan by ID
#[utoipa::path(
    get,
    path = "/loans/{id}",
    tag = "loans",
    params(("id" = i64, Path, description = "Loan ID")),
    responses(
        (status = 200, description = "Loan details", body = Loan),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn get_loan(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Loan>> {
    let loan = state.repository.loans.get_by_id(id).await?;
    Ok(Json(loan))
}

/// Update a loan's due or returned date
#[utoipa::path(
    put,
    path = "/loans/{id}",
    tag = "loans",
    params(("id" = i64, Path, description = "Loan ID")),
    request_body = UpdateLoan,
    responses(
        (status = 200, description = "Loan updated", body = Loan),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn update_loan(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateLoan>,
) -> AppResult<Json<Loan>> {
    let loan = state.repository.loans.update(id, &data).await?;
    Ok(Json(loan))
}

/// Delete a loan
#[utoipa::path(
    delete,
    path = "/loans/{id}",
    tag = "loans",
    params(("id" = i64, Path, description = "Loan ID")),
    responses(
        (status = 204, description = "Loan deleted"),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn delete_loan(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.repository.loans.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
