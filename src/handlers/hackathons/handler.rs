//! Hackathon handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::{HackathonService, ScoringService},
    state::AppState,
    utils::page_params,
};

use super::{
    request::{
        AssignJudgeRequest, CreateHackathonRequest, ListHackathonsQuery, MarkWinnersRequest,
        UpdateHackathonRequest,
    },
    response::{
        HackathonResponse, HackathonsListResponse, JudgeResponse, JudgesListResponse,
        LeaderboardResponse, WinnersResponse,
    },
};

/// List hackathons (with filtering)
pub async fn list_hackathons(
    State(state): State<AppState>,
    Query(query): Query<ListHackathonsQuery>,
) -> AppResult<Json<HackathonsListResponse>> {
    let (page, per_page) = page_params(query.page, query.per_page);

    let (hackathons, total) = HackathonService::list(
        state.db(),
        page,
        per_page,
        query.finished,
        query.search.as_deref(),
    )
    .await?;

    Ok(Json(HackathonsListResponse {
        hackathons,
        total,
        page,
        per_page,
    }))
}

/// Create a new hackathon
pub async fn create_hackathon(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateHackathonRequest>,
) -> AppResult<(StatusCode, Json<HackathonResponse>)> {
    payload.validate()?;

    let hackathon = HackathonService::create(
        state.db(),
        &auth_user,
        state.config().scoring.default_min_judges_required,
        payload,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(hackathon)))
}

/// List hackathons owned by the caller
pub async fn list_my_hackathons(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<HackathonResponse>>> {
    let hackathons = HackathonService::list_owned(state.db(), &auth_user).await?;
    Ok(Json(hackathons))
}

/// Get a specific hackathon
pub async fn get_hackathon(
    State(state): State<AppState>,
    Path(url): Path<String>,
) -> AppResult<Json<HackathonResponse>> {
    let hackathon = HackathonService::get(state.db(), &url).await?;
    Ok(Json(hackathon))
}

/// Update a hackathon
pub async fn update_hackathon(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(url): Path<String>,
    Json(payload): Json<UpdateHackathonRequest>,
) -> AppResult<Json<HackathonResponse>> {
    payload.validate()?;

    let hackathon = HackathonService::update(state.db(), &auth_user, &url, payload).await?;
    Ok(Json(hackathon))
}

/// Delete a hackathon
pub async fn delete_hackathon(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(url): Path<String>,
) -> AppResult<StatusCode> {
    HackathonService::delete(state.db(), &auth_user, &url).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Finish a hackathon
pub async fn finish_hackathon(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(url): Path<String>,
) -> AppResult<Json<HackathonResponse>> {
    let hackathon = ScoringService::finish(state.db(), &auth_user, &url).await?;
    Ok(Json(hackathon))
}

/// Mark winners of a finished hackathon
pub async fn mark_winners(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(url): Path<String>,
    Json(payload): Json<MarkWinnersRequest>,
) -> AppResult<Json<WinnersResponse>> {
    let winners =
        ScoringService::mark_winners(state.db(), &auth_user, &url, payload.participation_ids)
            .await?;
    Ok(Json(winners))
}

/// Get the leaderboard
pub async fn get_leaderboard(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(url): Path<String>,
) -> AppResult<Json<LeaderboardResponse>> {
    let leaderboard = ScoringService::compute_leaderboard(state.db(), &auth_user, &url).await?;
    Ok(Json(leaderboard))
}

/// List judges
pub async fn list_judges(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(url): Path<String>,
) -> AppResult<Json<JudgesListResponse>> {
    let judges = ScoringService::list_judges(state.db(), &auth_user, &url).await?;
    Ok(Json(judges))
}

/// Assign a judge
pub async fn assign_judge(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(url): Path<String>,
    Json(payload): Json<AssignJudgeRequest>,
) -> AppResult<Json<JudgeResponse>> {
    payload.validate()?;

    let judge =
        ScoringService::assign_judge(state.db(), &auth_user, &url, &payload.username).await?;
    Ok(Json(judge))
}

/// Remove a judge
pub async fn remove_judge(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((url, username)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    ScoringService::remove_judge(state.db(), &auth_user, &url, &username).await?;
    Ok(StatusCode::NO_CONTENT)
}
