//! Participation handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::{ScoringService, SubmissionService},
    state::AppState,
};

use super::{
    request::{RecordScoreRequest, SubmitProjectRequest, UpdateSubmissionRequest},
    response::{ParticipationResponse, ParticipationsListResponse, ScoreResponse, ScoresListResponse},
};

/// Submit a project to a hackathon
pub async fn submit_project(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(url): Path<String>,
    Json(payload): Json<SubmitProjectRequest>,
) -> AppResult<(StatusCode, Json<ParticipationResponse>)> {
    payload.validate()?;

    let participation = SubmissionService::submit(state.db(), &auth_user, &url, payload).await?;
    Ok((StatusCode::CREATED, Json(participation)))
}

/// List the submissions of a hackathon
pub async fn list_hackathon_submissions(
    State(state): State<AppState>,
    Path(url): Path<String>,
) -> AppResult<Json<ParticipationsListResponse>> {
    let participations = SubmissionService::list_by_hackathon(state.db(), &url).await?;
    Ok(Json(participations))
}

/// List the caller's submissions
pub async fn list_my_submissions(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<ParticipationsListResponse>> {
    let participations = SubmissionService::list_mine(state.db(), &auth_user).await?;
    Ok(Json(participations))
}

/// Get a specific submission
pub async fn get_submission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ParticipationResponse>> {
    let participation = SubmissionService::get(state.db(), &id).await?;
    Ok(Json(participation))
}

/// Update a submission
pub async fn update_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSubmissionRequest>,
) -> AppResult<Json<ParticipationResponse>> {
    payload.validate()?;

    let participation = SubmissionService::update(state.db(), &auth_user, &id, payload).await?;
    Ok(Json(participation))
}

/// Withdraw a submission
pub async fn withdraw_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    SubmissionService::withdraw(state.db(), &auth_user, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List per-judge scores of a submission
pub async fn list_scores(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ScoresListResponse>> {
    let scores = ScoringService::list_scores(state.db(), &auth_user, &id).await?;
    Ok(Json(scores))
}

/// Record the caller's score for a submission
pub async fn record_score(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<RecordScoreRequest>,
) -> AppResult<Json<ScoreResponse>> {
    let score = ScoringService::record_score(
        state.db(),
        &state.config().scoring,
        &auth_user,
        &id,
        payload.score,
    )
    .await?;

    Ok(Json(score))
}
