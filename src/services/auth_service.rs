//! Identity service
//!
//! Credentials are never handled here: the sign-in provider mints a signed
//! identity token and this service verifies it and maps it to a local user.

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;

use crate::{
    config::AuthConfig,
    constants::roles,
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
};

/// Identity token claims issued by the sign-in provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Provider account id
    pub sub: String,
    pub email: String,
    pub name: String,
    pub username: String,
    pub picture: Option<String>,
    pub exp: i64,
    pub iat: i64,
}

/// Identity service
pub struct AuthService;

impl AuthService {
    /// Verify an identity token and extract its claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        let claims = token_data.claims;
        if claims.email.trim().is_empty() || claims.username.trim().is_empty() {
            return Err(AppError::InvalidToken);
        }

        Ok(claims)
    }

    /// Map verified claims to a local user, creating it on first sign-in
    pub async fn resolve_user(pool: &PgPool, config: &AuthConfig, claims: &Claims) -> AppResult<User> {
        if let Some(user) = UserRepository::find_by_email(pool, &claims.email).await? {
            if user.image.as_deref() != claims.picture.as_deref() {
                return UserRepository::update_image(pool, &user.id, claims.picture.as_deref()).await;
            }
            return Ok(user);
        }

        let role = Self::initial_role(config, &claims.email);
        let name = if claims.name.trim().is_empty() {
            claims.username.as_str()
        } else {
            claims.name.trim()
        };

        let created = UserRepository::create(
            pool,
            name,
            &claims.username,
            &claims.email,
            claims.picture.as_deref(),
            role,
        )
        .await;

        let user = match created {
            Ok(user) => user,
            Err(AppError::Conflict(_)) => {
                // A concurrent first sign-in with the same email won the insert
                if let Some(user) = UserRepository::find_by_email(pool, &claims.email).await? {
                    return Ok(user);
                }
                return Err(AppError::Conflict(format!(
                    "Username '{}' is already taken",
                    claims.username
                )));
            }
            Err(e) => return Err(e),
        };

        info!(user_id = %user.id, username = %user.username, role = %user.role, "User created on first sign-in");
        Ok(user)
    }

    /// Role granted to a brand-new user
    fn initial_role(config: &AuthConfig, email: &str) -> &'static str {
        match &config.bootstrap_admin_email {
            Some(admin) if admin.eq_ignore_ascii_case(email.trim()) => roles::ADMIN,
            _ => roles::USER,
        }
    }
}
