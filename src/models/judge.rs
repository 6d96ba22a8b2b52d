//! Judge assignment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Grants `user_id` the right to score submissions of `hackathon_id`
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Judge {
    pub id: Uuid,
    pub user_id: Uuid,
    pub hackathon_id: Uuid,
    /// User who made the assignment
    pub invited_by: Uuid,
    pub created_at: DateTime<Utc>,
}
