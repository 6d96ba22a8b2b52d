//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::roles;

/// User database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub email: String,
    pub image: Option<String>,
    pub role: String,
    pub has_access: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Parsed role; unknown values degrade to the least privileged role
    pub fn role(&self) -> Role {
        Role::from_str(&self.role).unwrap_or(Role::User)
    }
}

/// Global user role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Organizer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => roles::USER,
            Self::Organizer => roles::ORGANIZER,
            Self::Admin => roles::ADMIN,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            roles::USER => Some(Self::User),
            roles::ORGANIZER => Some(Self::Organizer),
            roles::ADMIN => Some(Self::Admin),
            _ => None,
        }
    }

    /// Organizers and admins may create hackathons
    pub fn can_organize(&self) -> bool {
        matches!(self, Self::Organizer | Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
