//! Hackathon management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::{
    handlers::{announcements, participations},
    state::AppState,
};

/// Hackathon routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // Hackathon CRUD
        .route("/", get(handler::list_hackathons).post(handler::create_hackathon))
        .route("/mine", get(handler::list_my_hackathons))
        .route(
            "/{url}",
            get(handler::get_hackathon)
                .put(handler::update_hackathon)
                .delete(handler::delete_hackathon),
        )
        // Lifecycle and results
        .route("/{url}/finish", post(handler::finish_hackathon))
        .route("/{url}/winners", post(handler::mark_winners))
        .route("/{url}/leaderboard", get(handler::get_leaderboard))
        // Submissions
        .route(
            "/{url}/participations",
            get(participations::list_hackathon_submissions).post(participations::submit_project),
        )
        // Judges
        .route(
            "/{url}/judges",
            get(handler::list_judges).post(handler::assign_judge),
        )
        .route("/{url}/judges/{username}", delete(handler::remove_judge))
        // Announcements
        .route(
            "/{url}/announcements",
            get(announcements::list_announcements).post(announcements::create_announcement),
        )
}
