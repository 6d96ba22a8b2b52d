//! Logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::Request,
    http::{StatusCode, header::USER_AGENT},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

/// How a completed request is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Ok,
    ClientError,
    ServerError,
}

/// Classify a response status. Domain refusals that happen in normal use
/// (missing resources, duplicates, finished hackathons) are not warnings.
fn outcome(status: StatusCode) -> Outcome {
    if status.is_server_error() {
        Outcome::ServerError
    } else if status.is_client_error()
        && !matches!(
            status,
            StatusCode::NOT_FOUND | StatusCode::CONFLICT | StatusCode::LOCKED
        )
    {
        Outcome::ClientError
    } else {
        Outcome::Ok
    }
}

/// Request logging middleware
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let user_agent = request
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    match outcome(status) {
        Outcome::ServerError => warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            user_agent = %user_agent,
            "Request completed with server error"
        ),
        Outcome::ClientError => warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed with client error"
        ),
        Outcome::Ok => info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed"
        ),
    }

    response
}
