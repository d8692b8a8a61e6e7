//! Member record endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::member::{Member, MemberPayload},
};

use super::DeleteResponse;

/// List all members
#[utoipa::path(
    get,
    path = "/members/",
    tag = "members",
    responses(
        (status = 200, description = "List of members", body = Vec<Member>)
    )
)]
pub async fn list_members(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Member>>> {
    let members = state.repository.members.list().await?;
    Ok(Json(members))
}

/// Get a member by ID
#[utoipa::path(
    get,
    path = "/members/{member_id}",
    tag = "members",
    params(
        ("member_id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member details", body = Member),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get_member(
    State(state): State<crate::AppState>,
    Path(member_id): Path<i32>,
) -> AppResult<Json<Member>> {
    let member = state.repository.members.get_by_id(member_id).await?;
    Ok(Json(member))
}

/// Create a new member
#[utoipa::path(
    post,
    path = "/members/",
    tag = "members",
    request_body = MemberPayload,
    responses(
        (status = 200, description = "Member created", body = Member),
        (status = 409, description = "Email already exists")
    )
)]
pub async fn create_member(
    State(state): State<crate::AppState>,
    Json(member): Json<MemberPayload>,
) -> AppResult<Json<Member>> {
    let created = state.repository.members.create(&member).await?;
    Ok(Json(created))
}

/// Replace an existing member
#[utoipa::path(
    put,
    path = "/members/{member_id}",
    tag = "members",
    params(
        ("member_id" = i32, Path, description = "Member ID")
    ),
    request_body = MemberPayload,
    responses(
        (status = 200, description = "Member updated", body = Member),
        (status = 404, description = "Member not found")
    )
)]
pub async fn update_member(
    State(state): State<crate::AppState>,
    Path(member_id): Path<i32>,
    Json(member): Json<MemberPayload>,
) -> AppResult<Json<Member>> {
    let updated = state.repository.members.update(member_id, &member).await?;
    Ok(Json(updated))
}

/// Delete a member
#[utoipa::path(
    delete,
    path = "/members/{member_id}",
    tag = "members",
    params(
        ("member_id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member deleted", body = DeleteResponse),
        (status = 404, description = "Member not found")
    )
)]
pub async fn delete_member(
    State(state): State<crate::AppState>,
    Path(member_id): Path<i32>,
) -> AppResult<Json<DeleteResponse>> {
    state.repository.members.delete(member_id).await?;
    Ok(Json(DeleteResponse {
        message: "Member deleted".to_string(),
    }))
}
