//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// SCORING DEFAULTS
// =============================================================================

/// Lowest score a judge may give
pub const DEFAULT_SCORE_MIN: f64 = 0.0;

/// Highest score a judge may give
pub const DEFAULT_SCORE_MAX: f64 = 10.0;

/// Judges required before a leaderboard entry counts as fully reviewed
pub const DEFAULT_MIN_JUDGES_REQUIRED: i32 = 2;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers as stored in the `users.role` column
pub mod roles {
    pub const USER: &str = "USER";
    pub const ORGANIZER: &str = "ORGANIZER";
    pub const ADMIN: &str = "ADMIN";

    /// All user roles
    pub const ALL: &[&str] = &[USER, ORGANIZER, ADMIN];
}

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// RATE LIMITING
// =============================================================================

/// Rate limiting configuration
pub mod rate_limits {
    /// Score endpoints - max requests
    pub const SCORING_MAX_REQUESTS: i64 = 60;
    /// Score endpoints - window in seconds
    pub const SCORING_WINDOW_SECS: i64 = 60;

    /// Submission endpoints - max requests
    pub const SUBMISSION_MAX_REQUESTS: i64 = 20;
    /// Submission endpoints - window in seconds
    pub const SUBMISSION_WINDOW_SECS: i64 = 60;

    /// General API - max requests
    pub const GENERAL_MAX_REQUESTS: i64 = 100;
    /// General API - window in seconds
    pub const GENERAL_WINDOW_SECS: i64 = 60;
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum hackathon name length
pub const MAX_HACKATHON_NAME_LENGTH: u64 = 128;

/// Minimum hackathon url (slug) length
pub const MIN_HACKATHON_URL_LENGTH: u64 = 3;

/// Maximum hackathon url (slug) length
pub const MAX_HACKATHON_URL_LENGTH: u64 = 64;

/// Maximum length of description, rules and criteria texts
pub const MAX_LONG_TEXT_LENGTH: u64 = 20_000;

/// Maximum participation title length
pub const MAX_PARTICIPATION_TITLE_LENGTH: u64 = 128;

/// Maximum participation description length
pub const MAX_PARTICIPATION_DESCRIPTION_LENGTH: u64 = 5_000;

/// Maximum project url length
pub const MAX_PROJECT_URL_LENGTH: u64 = 2_048;

/// Maximum number of team members on a submission
pub const MAX_TEAM_MEMBERS: u64 = 10;

/// Maximum team member name / contact length
pub const MAX_TEAM_MEMBER_FIELD_LENGTH: u64 = 128;

/// Maximum announcement length
pub const MAX_ANNOUNCEMENT_LENGTH: u64 = 2_000;

/// Maximum display name length
pub const MAX_NAME_LENGTH: u64 = 100;
