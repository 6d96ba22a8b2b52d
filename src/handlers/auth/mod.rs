//! Authentication handlers
//!
//! Sign-in happens at the identity provider; this module only exposes the
//! identity the middleware resolved.

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Authentication routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/me", get(handler::get_current_user))
}
