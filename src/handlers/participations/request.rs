//! Participation request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{
        MAX_PARTICIPATION_DESCRIPTION_LENGTH, MAX_PARTICIPATION_TITLE_LENGTH,
        MAX_PROJECT_URL_LENGTH, MAX_TEAM_MEMBERS,
    },
    models::TeamMember,
};

/// Submit project request
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitProjectRequest {
    #[validate(
        length(min = 1, max = MAX_PARTICIPATION_TITLE_LENGTH),
        custom(function = "crate::utils::validate_not_blank")
    )]
    pub title: String,

    #[validate(length(max = MAX_PARTICIPATION_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    /// Repository or demo link
    #[validate(url, length(max = MAX_PROJECT_URL_LENGTH))]
    pub project_url: String,

    #[validate(length(max = MAX_TEAM_MEMBERS), nested)]
    pub team_members: Option<Vec<TeamMember>>,
}

/// Update submission request. Absent fields stay unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSubmissionRequest {
    #[validate(
        length(min = 1, max = MAX_PARTICIPATION_TITLE_LENGTH),
        custom(function = "crate::utils::validate_not_blank")
    )]
    pub title: Option<String>,

    #[validate(length(max = MAX_PARTICIPATION_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    #[validate(url, length(max = MAX_PROJECT_URL_LENGTH))]
    pub project_url: Option<String>,

    #[validate(length(max = MAX_TEAM_MEMBERS), nested)]
    pub team_members: Option<Vec<TeamMember>>,
}

/// Record score request. Bounds are checked against the scoring configuration.
#[derive(Debug, Deserialize)]
pub struct RecordScoreRequest {
    pub score: f64,
}
