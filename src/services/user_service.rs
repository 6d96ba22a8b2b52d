//! User service

use sqlx::PgPool;
use tracing::info;

use crate::{
    db::repositories::{ParticipationRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::{
        auth::CurrentUserResponse,
        users::{request::UpdateProfileRequest, response::UserProfileResponse},
    },
    middleware::auth::AuthenticatedUser,
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Get the caller's own profile
    pub async fn me(pool: &PgPool, user: &AuthenticatedUser) -> AppResult<CurrentUserResponse> {
        let user = UserRepository::find_by_id(pool, &user.id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user.into())
    }

    /// Get a public profile by username
    pub async fn get_profile(pool: &PgPool, username: &str) -> AppResult<UserProfileResponse> {
        let user = UserRepository::find_by_username(pool, username)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user.into())
    }

    /// Rename the caller. The new name is copied onto their submissions.
    pub async fn update_profile(
        pool: &PgPool,
        user: &AuthenticatedUser,
        payload: UpdateProfileRequest,
    ) -> AppResult<CurrentUserResponse> {
        if !user.has_access {
            return Err(AppError::Forbidden("Access has been revoked".to_string()));
        }

        let name = payload.name.trim();

        let mut tx = pool.begin().await?;
        let updated = UserRepository::update_name(&mut *tx, &user.id, name).await?;
        let synced = ParticipationRepository::sync_creator_name(&mut *tx, &user.id, name).await?;
        tx.commit().await?;

        info!(user_id = %user.id, submissions = synced, "Profile updated");

        Ok(updated.into())
    }
}
