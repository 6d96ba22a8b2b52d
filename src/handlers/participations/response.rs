//! Participation response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Participation, Score, TeamMember};

/// Participation response
#[derive(Debug, Serialize)]
pub struct ParticipationResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub project_url: String,
    pub hackathon_name: String,
    pub hackathon_url: String,
    pub creator_id: Uuid,
    pub creator_name: String,
    pub is_reviewed: bool,
    pub is_winner: bool,
    pub team_members: Vec<TeamMember>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Participation> for ParticipationResponse {
    fn from(p: Participation) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            project_url: p.project_url,
            hackathon_name: p.hackathon_name,
            hackathon_url: p.hackathon_url,
            creator_id: p.creator_id,
            creator_name: p.creator_name,
            is_reviewed: p.is_reviewed,
            is_winner: p.is_winner,
            team_members: p.team_members.0,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Participations list response
#[derive(Debug, Serialize)]
pub struct ParticipationsListResponse {
    pub participations: Vec<ParticipationResponse>,
    pub total: usize,
}

impl From<Vec<Participation>> for ParticipationsListResponse {
    fn from(participations: Vec<Participation>) -> Self {
        let participations: Vec<ParticipationResponse> =
            participations.into_iter().map(Into::into).collect();
        Self {
            total: participations.len(),
            participations,
        }
    }
}

/// Recorded score response
#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub id: Uuid,
    pub judge_id: Uuid,
    pub participation_id: Uuid,
    pub score: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Score> for ScoreResponse {
    fn from(s: Score) -> Self {
        Self {
            id: s.id,
            judge_id: s.judge_id,
            participation_id: s.participation_id,
            score: s.score,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

/// One judge's score with judge details
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct JudgeScoreResponse {
    pub id: Uuid,
    pub judge_id: Uuid,
    pub judge_username: String,
    pub judge_name: String,
    pub score: f64,
    pub updated_at: DateTime<Utc>,
}

/// Scores of a participation
#[derive(Debug, Serialize)]
pub struct ScoresListResponse {
    pub participation_id: Uuid,
    pub scores: Vec<JudgeScoreResponse>,
    pub average_score: Option<f64>,
}
