//! Rate limiting middleware
//!
//! Fixed-window counters in Redis, keyed by client IP and endpoint bucket.

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::{ConnectInfo, Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};
use redis::AsyncCommands;
use tracing::{debug, warn};

use crate::{
    constants::{API_BASE_PATH, rate_limits},
    error::AppError,
    state::AppState,
};

/// Endpoint group sharing one counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Scoring,
    Submissions,
    General,
}

impl Bucket {
    fn name(&self) -> &'static str {
        match self {
            Self::Scoring => "scoring",
            Self::Submissions => "submissions",
            Self::General => "general",
        }
    }

    /// (max requests, window in seconds)
    fn limit(&self) -> (i64, i64) {
        match self {
            Self::Scoring => (
                rate_limits::SCORING_MAX_REQUESTS,
                rate_limits::SCORING_WINDOW_SECS,
            ),
            Self::Submissions => (
                rate_limits::SUBMISSION_MAX_REQUESTS,
                rate_limits::SUBMISSION_WINDOW_SECS,
            ),
            Self::General => (
                rate_limits::GENERAL_MAX_REQUESTS,
                rate_limits::GENERAL_WINDOW_SECS,
            ),
        }
    }
}

/// Pick the bucket for a request. Only writes get the tighter buckets.
fn bucket_for(method: &Method, path: &str) -> Bucket {
    if *method == Method::GET {
        return Bucket::General;
    }

    let path = path.strip_prefix(API_BASE_PATH).unwrap_or(path);
    if path.starts_with("/participations/") && path.ends_with("/scores") {
        Bucket::Scoring
    } else if path.starts_with("/participations/")
        || (path.starts_with("/hackathons/") && path.ends_with("/participations"))
    {
        Bucket::Submissions
    } else {
        Bucket::General
    }
}

/// Rate limit middleware
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let bucket = bucket_for(request.method(), request.uri().path());
    let (limit, window) = bucket.limit();

    let key = format!("rate_limit:{}:{}", addr.ip(), bucket.name());
    let mut redis = state.redis();

    // An unavailable Redis lets traffic through
    let count: i64 = match redis.incr(&key, 1).await {
        Ok(count) => count,
        Err(e) => {
            warn!(error = %e, "Rate limiter unavailable");
            return Ok(next.run(request).await);
        }
    };

    if count == 1 {
        let _: () = redis.expire(&key, window).await.unwrap_or(());
    }

    if count > limit {
        debug!(ip = %addr.ip(), bucket = bucket.name(), count, "Rate limit exceeded");
        return Err(AppError::TooManyRequests);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_writes_use_scoring_bucket() {
        let path = format!("{}/participations/3f1c/scores", API_BASE_PATH);
        assert_eq!(bucket_for(&Method::PUT, &path), Bucket::Scoring);
        assert_eq!(bucket_for(&Method::GET, &path), Bucket::General);
    }

    #[test]
    fn test_submission_writes_use_submission_bucket() {
        let submit = format!("{}/hackathons/rust-fest/participations", API_BASE_PATH);
        let edit = format!("{}/participations/3f1c", API_BASE_PATH);
        assert_eq!(bucket_for(&Method::POST, &submit), Bucket::Submissions);
        assert_eq!(bucket_for(&Method::PUT, &edit), Bucket::Submissions);
        assert_eq!(bucket_for(&Method::DELETE, &edit), Bucket::Submissions);
    }

    #[test]
    fn test_everything_else_is_general() {
        let create = format!("{}/hackathons", API_BASE_PATH);
        assert_eq!(bucket_for(&Method::POST, &create), Bucket::General);
        assert_eq!(bucket_for(&Method::GET, "/api/v1/health"), Bucket::General);
    }
}
