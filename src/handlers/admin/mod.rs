//! Admin management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

/// Admin routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // User management
        .route("/users", get(handler::list_all_users))
        .route("/users/{id}/role", put(handler::update_user_role))
        .route("/users/{id}/access", put(handler::update_user_access))
        // Hackathon moderation
        .route("/hackathons/{url}/verified", put(handler::set_hackathon_verified))
}
