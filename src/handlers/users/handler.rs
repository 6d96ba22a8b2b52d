//! User handler implementations

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::auth::CurrentUserResponse,
    middleware::auth::AuthenticatedUser,
    services::UserService,
    state::AppState,
};

use super::{request::UpdateProfileRequest, response::UserProfileResponse};

/// Get a user's public profile
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<UserProfileResponse>> {
    let user = UserService::get_profile(state.db(), &username).await?;
    Ok(Json(user))
}

/// Update the signed-in user's profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> AppResult<Json<CurrentUserResponse>> {
    payload.validate()?;

    let user = UserService::update_profile(state.db(), &auth_user, payload).await?;
    Ok(Json(user))
}
