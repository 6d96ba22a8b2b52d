//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod announcement_repo;
pub mod hackathon_repo;
pub mod judge_repo;
pub mod participation_repo;
pub mod score_repo;
pub mod user_repo;

pub use announcement_repo::AnnouncementRepository;
pub use hackathon_repo::HackathonRepository;
pub use judge_repo::JudgeRepository;
pub use participation_repo::ParticipationRepository;
pub use score_repo::ScoreRepository;
pub use user_repo::UserRepository;
