//! Announcement handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::put};

use crate::state::AppState;

/// Announcement routes addressed by id; listing and posting live under hackathons
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        put(handler::update_announcement).delete(handler::delete_announcement),
    )
}
