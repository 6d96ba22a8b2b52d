//! Announcement handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult, middleware::auth::AuthenticatedUser, services::AnnouncementService,
    state::AppState,
};

use super::{
    request::{CreateAnnouncementRequest, UpdateAnnouncementRequest},
    response::{AnnouncementResponse, AnnouncementsListResponse},
};

/// List the announcements of a hackathon
pub async fn list_announcements(
    State(state): State<AppState>,
    Path(url): Path<String>,
) -> AppResult<Json<AnnouncementsListResponse>> {
    let announcements = AnnouncementService::list(state.db(), &url).await?;
    Ok(Json(announcements))
}

/// Post an announcement
pub async fn create_announcement(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(url): Path<String>,
    Json(payload): Json<CreateAnnouncementRequest>,
) -> AppResult<(StatusCode, Json<AnnouncementResponse>)> {
    payload.validate()?;

    let announcement = AnnouncementService::create(state.db(), &auth_user, &url, payload).await?;
    Ok((StatusCode::CREATED, Json(announcement)))
}

/// Edit an announcement
pub async fn update_announcement(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAnnouncementRequest>,
) -> AppResult<Json<AnnouncementResponse>> {
    payload.validate()?;

    let announcement = AnnouncementService::update(state.db(), &auth_user, &id, payload).await?;
    Ok(Json(announcement))
}

/// Delete an announcement
pub async fn delete_announcement(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    AnnouncementService::delete(state.db(), &auth_user, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
