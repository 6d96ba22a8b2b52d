//! User request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_NAME_LENGTH;

/// Update own profile request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(
        length(min = 1, max = MAX_NAME_LENGTH),
        custom(function = "crate::utils::validate_not_blank")
    )]
    pub name: String,
}
