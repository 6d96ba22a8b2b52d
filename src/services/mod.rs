//! Business logic services
//!
//! Services take the caller identity explicitly, run access checks and
//! preconditions, and own transaction boundaries.

pub mod admin_service;
pub mod announcement_service;
pub mod auth_service;
pub mod hackathon_service;
pub mod scoring_service;
pub mod submission_service;
pub mod user_service;

pub use admin_service::AdminService;
pub use announcement_service::AnnouncementService;
pub use auth_service::AuthService;
pub use hackathon_service::HackathonService;
pub use scoring_service::ScoringService;
pub use submission_service::SubmissionService;
pub use user_service::UserService;
