//! Participation (project submission) handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Participation routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/mine", get(handler::list_my_submissions))
        .route(
            "/{id}",
            get(handler::get_submission)
                .put(handler::update_submission)
                .delete(handler::withdraw_submission),
        )
        .route(
            "/{id}/scores",
            get(handler::list_scores).put(handler::record_score),
        )
}
