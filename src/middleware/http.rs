//! Transport layers shared by every route

use std::time::Duration;

use axum::{Router, response::IntoResponse};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Wrap a router in tracing, CORS, compression, timeout and body limit layers.
/// Layers run outermost first.
pub fn with_http_layers<S>(router: Router<S>, request_timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .layer(CompressionLayer::new())
            .layer(TimeoutLayer::new(request_timeout))
            .map_response(IntoResponse::into_response)
            .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES)),
    )
}
