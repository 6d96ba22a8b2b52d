//! Admin service

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    authorization::{ADMINISTER, AccessContext},
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    handlers::admin::response::AdminUserResponse,
    middleware::auth::AuthenticatedUser,
    models::Role,
    utils::page_offset,
};

/// Admin service for user management
pub struct AdminService;

impl AdminService {
    /// List all users with admin details
    pub async fn list_users(
        pool: &PgPool,
        admin: &AuthenticatedUser,
        page: u32,
        per_page: u32,
        search: Option<&str>,
        role: Option<&str>,
    ) -> AppResult<(Vec<AdminUserResponse>, i64)> {
        ADMINISTER.check(&AccessContext::new(admin))?;

        let offset = page_offset(page, per_page);
        let limit = i64::from(per_page);

        let (users, total) = UserRepository::list(pool, offset, limit, search, role).await?;
        Ok((users.into_iter().map(Into::into).collect(), total))
    }

    /// Change a user's role. Admins cannot demote themselves.
    pub async fn set_role(
        pool: &PgPool,
        admin: &AuthenticatedUser,
        user_id: &Uuid,
        role: Role,
    ) -> AppResult<AdminUserResponse> {
        ADMINISTER.check(&AccessContext::new(admin))?;

        if *user_id == admin.id && role != Role::Admin {
            return Err(AppError::Validation("Cannot demote yourself".to_string()));
        }

        let user = UserRepository::update_role(pool, user_id, role.as_str()).await?;

        info!(user_id = %user.id, role = %role, admin_id = %admin.id, "User role changed");
        Ok(user.into())
    }

    /// Grant or revoke a user's access. Admins cannot revoke themselves.
    pub async fn set_access(
        pool: &PgPool,
        admin: &AuthenticatedUser,
        user_id: &Uuid,
        has_access: bool,
    ) -> AppResult<AdminUserResponse> {
        ADMINISTER.check(&AccessContext::new(admin))?;

        if *user_id == admin.id && !has_access {
            return Err(AppError::Validation(
                "Cannot revoke your own access".to_string(),
            ));
        }

        let user = UserRepository::set_access(pool, user_id, has_access).await?;

        info!(user_id = %user.id, has_access, admin_id = %admin.id, "User access changed");
        Ok(user.into())
    }
}
