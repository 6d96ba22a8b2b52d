//! Authentication handler implementations

use axum::{Json, extract::State};

use crate::{
    error::AppResult, middleware::auth::AuthenticatedUser, services::UserService,
    state::AppState,
};

use super::response::CurrentUserResponse;

/// Get the signed-in user
pub async fn get_current_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<CurrentUserResponse>> {
    let user = UserService::me(state.db(), &auth_user).await?;
    Ok(Json(user))
}
