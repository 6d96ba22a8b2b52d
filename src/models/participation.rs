//! Participation (project submission) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};
use uuid::Uuid;
use validator::Validate;

use crate::constants::MAX_TEAM_MEMBER_FIELD_LENGTH;

/// Participation database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Participation {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub project_url: String,
    /// Copy of the hackathon name, kept in sync on rename
    pub hackathon_name: String,
    pub hackathon_url: String,
    pub creator_id: Uuid,
    /// Copy of the creator's name, kept in sync on rename
    pub creator_name: String,
    pub is_reviewed: bool,
    pub is_winner: bool,
    pub team_members: Json<Vec<TeamMember>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A member listed on a team submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TeamMember {
    #[validate(length(min = 1, max = MAX_TEAM_MEMBER_FIELD_LENGTH))]
    pub name: String,

    /// Free-form contact handle (email, GitHub login, ...)
    #[validate(length(max = MAX_TEAM_MEMBER_FIELD_LENGTH))]
    pub contact: Option<String>,
}
