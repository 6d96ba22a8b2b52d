//! Hackathon model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Hackathon database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Hackathon {
    pub id: Uuid,
    pub name: String,
    /// Immutable slug used for routing
    pub url: String,
    pub description: Option<String>,
    pub rules: Option<String>,
    pub criteria: Option<String>,
    pub owner_id: Uuid,
    pub is_finished: bool,
    pub verified: bool,
    pub min_judges_required: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Hackathon {
    /// Lifecycle state derived from the finish flag
    pub fn status(&self) -> HackathonStatus {
        if self.is_finished {
            HackathonStatus::Finished
        } else {
            HackathonStatus::Open
        }
    }

    /// Check if the hackathon still accepts submissions, judges and scores
    pub fn is_open(&self) -> bool {
        self.status() == HackathonStatus::Open
    }
}

/// Hackathon lifecycle. `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HackathonStatus {
    Open,
    Finished,
}

impl std::fmt::Display for HackathonStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Finished => write!(f, "finished"),
        }
    }
}
