//! Member endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::member::{CreateMember, Member, UpdateMember},
};

/// List all members
#[utoipa::path(
    get,
    path = "/members",
    tag = "members",
    responses(
        (status = 200, description = "Members list", body = Vec<Member>)
    )
)]
pub async fn list_members(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Member>>> {
    let members = state.repository.members.list().await?;
    Ok(Json(members))
}

/// Create a member
#[utoipa::path(
    post,
    path = "/members",
    tag = "members",
    request_body = CreateMember,
    responses(
        (status = 201, description = "Member created", body = Member)
    )
)]
pub async fn create_member(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateMember>,
) -> AppResult<(StatusCode, Json<Member>)> {
    let member = state.repository.members.create(&data).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// Get member by ID
#[utoipa::path(
    get,
    path = "/members/{id}",
    tag = "members",
    params(("id" = i64, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member details", body = Member),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get_member(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Member>> {
    let member = state.repository.members.get_by_id(id).await?;
    Ok(Json(member))
}

/// Update a member
#[utoipa::path(
    put,
    path = "/members/{id}",
    tag = "members",
    params(("id" = i64, Path, description = "Member ID")),
    request_body = UpdateMember,
    responses(
        (status = 200, description = "Member updated", body = Member),
        (status = 404, description = "Member not found")
    )
)]
pub async fn update_member(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateMember>,
) -> AppResult<Json<Member>> {
    let member = state.repository.members.update(id, &data).await?;
    Ok(Json(member))
}

/// Delete a member
#[utoipa::path(
    delete,
    path = "/members/{id}",
    tag = "members",
    params(("id" = i64, Path, description = "Member ID")),
    responses(
        (status = 204, description = "Member deleted"),
        (status = 404, description = "Member not found")
    )
)]
pub async fn delete_member(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.repository.members.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
