//! HTTP middleware

pub mod auth;
pub mod http;
pub mod logging;
pub mod rate_limit;

pub use auth::{AuthenticatedUser, identity_middleware};
pub use http::with_http_layers;
pub use logging::logging_middleware;
pub use rate_limit::rate_limit_middleware;
