//! Authentication response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Role, User};

/// The signed-in user's own profile
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub email: String,
    pub image: Option<String>,
    pub role: Role,
    pub has_access: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self {
            role: user.role(),
            id: user.id,
            name: user.name,
            username: user.username,
            email: user.email,
            image: user.image,
            has_access: user.has_access,
            created_at: user.created_at,
        }
    }
}
