//! Announcement response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Announcement;

/// Announcement response
#[derive(Debug, Serialize)]
pub struct AnnouncementResponse {
    pub id: Uuid,
    pub hackathon_id: Uuid,
    pub content: String,
    pub highlighted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Announcement> for AnnouncementResponse {
    fn from(a: Announcement) -> Self {
        Self {
            id: a.id,
            hackathon_id: a.hackathon_id,
            content: a.content,
            highlighted: a.highlighted,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

/// Announcements list response
#[derive(Debug, Serialize)]
pub struct AnnouncementsListResponse {
    pub announcements: Vec<AnnouncementResponse>,
}
