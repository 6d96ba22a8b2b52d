//! Score model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One judge's score for one participation
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Score {
    pub id: Uuid,
    pub judge_id: Uuid,
    pub participation_id: Uuid,
    pub score: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single stored score value, the input of leaderboard aggregation
#[derive(Debug, Clone, Copy, FromRow)]
pub struct ScoreValue {
    pub participation_id: Uuid,
    pub score: f64,
}
