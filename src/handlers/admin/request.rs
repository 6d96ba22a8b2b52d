//! Admin request DTOs

use serde::Deserialize;
use validator::Validate;

/// List users query parameters
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub role: Option<String>,
}

/// Update user role request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRoleRequest {
    #[validate(custom(function = "crate::utils::validate_role"))]
    pub role: String,
}

/// Grant or revoke access request
#[derive(Debug, Deserialize)]
pub struct UpdateUserAccessRequest {
    pub has_access: bool,
}

/// Set hackathon verification request
#[derive(Debug, Deserialize)]
pub struct SetVerifiedRequest {
    pub verified: bool,
}
