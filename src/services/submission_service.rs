//! Submission service
//!
//! Participation lifecycle. Every write that depends on the hackathon being
//! open holds a shared lock on the hackathon row for the whole transaction,
//! so it cannot interleave with `finish`.

use sqlx::{PgPool, Postgres, Transaction};
use tracing::info;
use uuid::Uuid;

use crate::{
    authorization::{AccessContext, EDIT_SUBMISSION, PARTICIPATE},
    db::repositories::{HackathonRepository, ParticipationRepository},
    error::{AppError, AppResult},
    handlers::participations::{
        request::{SubmitProjectRequest, UpdateSubmissionRequest},
        response::{ParticipationResponse, ParticipationsListResponse},
    },
    middleware::auth::AuthenticatedUser,
    models::{Hackathon, Participation},
};

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// Submit a project to an open hackathon
    pub async fn submit(
        pool: &PgPool,
        user: &AuthenticatedUser,
        hackathon_url: &str,
        payload: SubmitProjectRequest,
    ) -> AppResult<ParticipationResponse> {
        PARTICIPATE.check(&AccessContext::new(user))?;

        let mut tx = pool.begin().await?;
        let hackathon = Self::lock_open_hackathon(&mut tx, hackathon_url).await?;

        if ParticipationRepository::find_by_creator(&mut *tx, &user.id, &hackathon.url)
            .await?
            .is_some()
        {
            return Err(Self::already_submitted());
        }

        let team_members = payload.team_members.unwrap_or_default();
        // A concurrent submit that passed the check above loses on the unique key
        let participation = ParticipationRepository::create(
            &mut *tx,
            payload.title.trim(),
            payload.description.as_deref(),
            &payload.project_url,
            &hackathon.name,
            &hackathon.url,
            &user.id,
            &user.name,
            &team_members,
        )
        .await
        .map_err(|e| match e {
            AppError::Conflict(_) => Self::already_submitted(),
            other => other,
        })?;

        tx.commit().await?;

        info!(
            participation_id = %participation.id,
            hackathon_url = %hackathon.url,
            user_id = %user.id,
            "Project submitted"
        );

        Ok(participation.into())
    }

    /// Update a submission; absent fields stay unchanged
    pub async fn update(
        pool: &PgPool,
        user: &AuthenticatedUser,
        participation_id: &Uuid,
        payload: UpdateSubmissionRequest,
    ) -> AppResult<ParticipationResponse> {
        let mut tx = pool.begin().await?;
        let participation = Self::load_own_submission(&mut tx, user, participation_id).await?;
        Self::lock_open_hackathon(&mut tx, &participation.hackathon_url).await?;

        let updated = ParticipationRepository::update(
            &mut *tx,
            &participation.id,
            payload.title.as_deref().map(str::trim),
            payload.description.as_deref(),
            payload.project_url.as_deref(),
            payload.team_members.as_deref(),
        )
        .await?;

        tx.commit().await?;

        info!(participation_id = %updated.id, user_id = %user.id, "Submission updated");

        Ok(updated.into())
    }

    /// Withdraw a submission while the hackathon is open; its scores cascade
    pub async fn withdraw(
        pool: &PgPool,
        user: &AuthenticatedUser,
        participation_id: &Uuid,
    ) -> AppResult<()> {
        let mut tx = pool.begin().await?;
        let participation = Self::load_own_submission(&mut tx, user, participation_id).await?;
        Self::lock_open_hackathon(&mut tx, &participation.hackathon_url).await?;

        ParticipationRepository::delete(&mut *tx, &participation.id).await?;
        tx.commit().await?;

        info!(
            participation_id = %participation.id,
            hackathon_url = %participation.hackathon_url,
            user_id = %user.id,
            "Submission withdrawn"
        );

        Ok(())
    }

    /// Get a submission by ID
    pub async fn get(pool: &PgPool, participation_id: &Uuid) -> AppResult<ParticipationResponse> {
        let participation = ParticipationRepository::find_by_id(pool, participation_id)
            .await?
            .ok_or_else(Self::not_found)?;

        Ok(participation.into())
    }

    /// List the submissions of a hackathon in submission order
    pub async fn list_by_hackathon(
        pool: &PgPool,
        hackathon_url: &str,
    ) -> AppResult<ParticipationsListResponse> {
        let hackathon = HackathonRepository::find_by_url(pool, hackathon_url)
            .await?
            .ok_or_else(|| AppError::NotFound("Hackathon not found".to_string()))?;

        let participations = ParticipationRepository::list_by_hackathon(pool, &hackathon.url).await?;
        Ok(participations.into())
    }

    /// List the caller's own submissions across hackathons
    pub async fn list_mine(
        pool: &PgPool,
        user: &AuthenticatedUser,
    ) -> AppResult<ParticipationsListResponse> {
        let participations = ParticipationRepository::list_by_creator(pool, &user.id).await?;
        Ok(participations.into())
    }

    /// Load a hackathon with a shared row lock and require it to be open
    pub(crate) async fn lock_open_hackathon(
        tx: &mut Transaction<'_, Postgres>,
        hackathon_url: &str,
    ) -> AppResult<Hackathon> {
        let hackathon = HackathonRepository::find_by_url_for_share(&mut **tx, hackathon_url)
            .await?
            .ok_or_else(|| AppError::NotFound("Hackathon not found".to_string()))?;

        if !hackathon.is_open() {
            return Err(AppError::hackathon_finished());
        }

        Ok(hackathon)
    }

    async fn load_own_submission(
        tx: &mut Transaction<'_, Postgres>,
        user: &AuthenticatedUser,
        participation_id: &Uuid,
    ) -> AppResult<Participation> {
        let participation = ParticipationRepository::find_by_id(&mut **tx, participation_id)
            .await?
            .ok_or_else(Self::not_found)?;

        EDIT_SUBMISSION.check(&AccessContext::new(user).with_submission(&participation))?;
        Ok(participation)
    }

    fn not_found() -> AppError {
        AppError::NotFound("Submission not found".to_string())
    }

    fn already_submitted() -> AppError {
        AppError::Conflict("You already submitted a project to this hackathon".to_string())
    }
}
