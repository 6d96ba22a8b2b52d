//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod announcement;
pub mod hackathon;
pub mod judge;
pub mod participation;
pub mod score;
pub mod user;

pub use announcement::*;
pub use hackathon::*;
pub use judge::*;
pub use participation::*;
pub use score::*;
pub use user::*;
