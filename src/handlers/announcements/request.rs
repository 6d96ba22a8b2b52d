//! Announcement request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_ANNOUNCEMENT_LENGTH;

/// Create announcement request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAnnouncementRequest {
    #[validate(
        length(min = 1, max = MAX_ANNOUNCEMENT_LENGTH),
        custom(function = "crate::utils::validate_not_blank")
    )]
    pub content: String,

    pub highlighted: Option<bool>,
}

/// Update announcement request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAnnouncementRequest {
    #[validate(
        length(min = 1, max = MAX_ANNOUNCEMENT_LENGTH),
        custom(function = "crate::utils::validate_not_blank")
    )]
    pub content: Option<String>,

    pub highlighted: Option<bool>,
}
