//! Hackathon response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Hackathon, HackathonStatus};

/// Hackathon response
#[derive(Debug, Serialize)]
pub struct HackathonResponse {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub rules: Option<String>,
    pub criteria: Option<String>,
    pub owner_id: Uuid,
    pub status: HackathonStatus,
    pub is_finished: bool,
    pub verified: bool,
    pub min_judges_required: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Hackathon> for HackathonResponse {
    fn from(h: Hackathon) -> Self {
        Self {
            status: h.status(),
            id: h.id,
            name: h.name,
            url: h.url,
            description: h.description,
            rules: h.rules,
            criteria: h.criteria,
            owner_id: h.owner_id,
            is_finished: h.is_finished,
            verified: h.verified,
            min_judges_required: h.min_judges_required,
            created_at: h.created_at,
            updated_at: h.updated_at,
        }
    }
}

/// Hackathon list response
#[derive(Debug, Serialize)]
pub struct HackathonsListResponse {
    pub hackathons: Vec<HackathonResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Judge assignment with user details
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct JudgeResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub name: String,
    pub image: Option<String>,
    pub invited_by: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Judges list response
#[derive(Debug, Serialize)]
pub struct JudgesListResponse {
    pub judges: Vec<JudgeResponse>,
}

/// Leaderboard entry
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    /// 1-based position in the ordering
    pub rank: u32,
    pub participation_id: Uuid,
    pub title: String,
    pub project_url: String,
    pub creator_id: Uuid,
    pub creator_name: String,
    pub is_winner: bool,
    /// Mean of all judge scores, `None` while unscored
    pub average_score: Option<f64>,
    pub judge_count: u32,
    pub meets_min_judges: bool,
    pub submitted_at: DateTime<Utc>,
}

/// Leaderboard response
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub hackathon_id: Uuid,
    pub hackathon_url: String,
    pub is_finished: bool,
    pub min_judges_required: i32,
    pub entries: Vec<LeaderboardEntry>,
}

/// Mark winners response
#[derive(Debug, Serialize)]
pub struct WinnersResponse {
    pub hackathon_url: String,
    pub winners: Vec<Uuid>,
}
