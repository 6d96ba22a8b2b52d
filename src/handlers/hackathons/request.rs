//! Hackathon request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::{MAX_HACKATHON_NAME_LENGTH, MAX_LONG_TEXT_LENGTH};

/// Create hackathon request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateHackathonRequest {
    #[validate(
        length(min = 1, max = MAX_HACKATHON_NAME_LENGTH),
        custom(function = "crate::utils::validate_not_blank")
    )]
    pub name: String,

    /// Public slug, immutable once created
    #[validate(custom(function = "crate::utils::validate_slug"))]
    pub url: String,

    #[validate(length(max = MAX_LONG_TEXT_LENGTH))]
    pub description: Option<String>,

    #[validate(length(max = MAX_LONG_TEXT_LENGTH))]
    pub rules: Option<String>,

    #[validate(length(max = MAX_LONG_TEXT_LENGTH))]
    pub criteria: Option<String>,

    /// Judges needed before a leaderboard entry counts as fully reviewed
    #[validate(range(min = 1, max = 100))]
    pub min_judges_required: Option<i32>,
}

/// Update hackathon request. The url cannot be changed.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateHackathonRequest {
    #[validate(
        length(min = 1, max = MAX_HACKATHON_NAME_LENGTH),
        custom(function = "crate::utils::validate_not_blank")
    )]
    pub name: Option<String>,

    #[validate(length(max = MAX_LONG_TEXT_LENGTH))]
    pub description: Option<String>,

    #[validate(length(max = MAX_LONG_TEXT_LENGTH))]
    pub rules: Option<String>,

    #[validate(length(max = MAX_LONG_TEXT_LENGTH))]
    pub criteria: Option<String>,

    #[validate(range(min = 1, max = 100))]
    pub min_judges_required: Option<i32>,
}

/// List hackathons query parameters
#[derive(Debug, Deserialize)]
pub struct ListHackathonsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub finished: Option<bool>,
    pub search: Option<String>,
}

/// Assign judge request
#[derive(Debug, Deserialize, Validate)]
pub struct AssignJudgeRequest {
    #[validate(length(min = 1, max = 64))]
    pub username: String,
}

/// Mark winners request. Any number of ids, duplicates allowed.
#[derive(Debug, Deserialize)]
pub struct MarkWinnersRequest {
    pub participation_ids: Vec<Uuid>,
}
