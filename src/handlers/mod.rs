//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod admin;
pub mod announcements;
pub mod auth;
pub mod hackathons;
pub mod health;
pub mod participations;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes())
        .nest("/users", users::routes())
        .nest("/hackathons", hackathons::routes())
        .nest("/participations", participations::routes())
        .nest("/announcements", announcements::routes())
        .nest("/admin", admin::routes())
}
