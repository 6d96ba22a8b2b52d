//! Admin handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    handlers::hackathons::response::HackathonResponse,
    middleware::auth::AuthenticatedUser,
    models::Role,
    services::{AdminService, HackathonService},
    state::AppState,
    utils::page_params,
};

use super::{
    request::{ListUsersQuery, SetVerifiedRequest, UpdateUserAccessRequest, UpdateUserRoleRequest},
    response::{AdminUserResponse, AdminUsersListResponse},
};

/// List all users with admin details
pub async fn list_all_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<AdminUsersListResponse>> {
    let (page, per_page) = page_params(query.page, query.per_page);

    let (users, total) = AdminService::list_users(
        state.db(),
        &auth_user,
        page,
        per_page,
        query.search.as_deref(),
        query.role.as_deref(),
    )
    .await?;

    Ok(Json(AdminUsersListResponse {
        users,
        total,
        page,
        per_page,
    }))
}

/// Update a user's role
pub async fn update_user_role(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRoleRequest>,
) -> AppResult<Json<AdminUserResponse>> {
    payload.validate()?;

    let role = Role::from_str(&payload.role)
        .ok_or_else(|| AppError::Validation(format!("Invalid role: {}", payload.role)))?;

    let user = AdminService::set_role(state.db(), &auth_user, &id, role).await?;
    Ok(Json(user))
}

/// Grant or revoke a user's access
pub async fn update_user_access(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserAccessRequest>,
) -> AppResult<Json<AdminUserResponse>> {
    let user = AdminService::set_access(state.db(), &auth_user, &id, payload.has_access).await?;
    Ok(Json(user))
}

/// Set a hackathon's verified badge
pub async fn set_hackathon_verified(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(url): Path<String>,
    Json(payload): Json<SetVerifiedRequest>,
) -> AppResult<Json<HackathonResponse>> {
    let hackathon =
        HackathonService::set_verified(state.db(), &auth_user, &url, payload.verified).await?;
    Ok(Json(hackathon))
}
