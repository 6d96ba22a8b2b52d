//! Hackcontrol - Hackathon Management Backend
//!
//! This library provides the core functionality for Hackcontrol: hackathon
//! creation, project submissions, judge scoring, leaderboards, winners and
//! announcements, with role-based access control.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers and validated DTOs (thin layer)
//! - **Services**: Business logic, access checks and transactions
//! - **Authorization**: Capability predicates evaluated in one place
//! - **Repositories**: Database access
//! - **Models**: Domain models

pub mod authorization;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
