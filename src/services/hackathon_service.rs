//! Hackathon service

use sqlx::PgPool;
use tracing::info;

use crate::{
    authorization::{ADMINISTER, AccessContext, MANAGE_HACKATHON, ORGANIZE},
    db::repositories::{HackathonRepository, ParticipationRepository},
    error::{AppError, AppResult},
    handlers::hackathons::{
        request::{CreateHackathonRequest, UpdateHackathonRequest},
        response::HackathonResponse,
    },
    middleware::auth::AuthenticatedUser,
    models::Hackathon,
    utils::page_offset,
};

/// Hackathon service for business logic
pub struct HackathonService;

impl HackathonService {
    /// Create a new hackathon owned by the caller
    pub async fn create(
        pool: &PgPool,
        user: &AuthenticatedUser,
        default_min_judges_required: i32,
        payload: CreateHackathonRequest,
    ) -> AppResult<HackathonResponse> {
        ORGANIZE.check(&AccessContext::new(user))?;

        let hackathon = HackathonRepository::create(
            pool,
            payload.name.trim(),
            &payload.url,
            payload.description.as_deref(),
            payload.rules.as_deref(),
            payload.criteria.as_deref(),
            &user.id,
            payload
                .min_judges_required
                .unwrap_or(default_min_judges_required),
        )
        .await
        .map_err(|e| match e {
            AppError::Conflict(_) => {
                AppError::Conflict(format!("Hackathon url '{}' is already taken", payload.url))
            }
            other => other,
        })?;

        info!(hackathon_id = %hackathon.id, url = %hackathon.url, owner_id = %user.id, "Hackathon created");

        Ok(hackathon.into())
    }

    /// Get hackathon by url
    pub async fn get(pool: &PgPool, url: &str) -> AppResult<HackathonResponse> {
        Ok(Self::find(pool, url).await?.into())
    }

    /// List hackathons with pagination
    pub async fn list(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        finished: Option<bool>,
        search: Option<&str>,
    ) -> AppResult<(Vec<HackathonResponse>, i64)> {
        let offset = page_offset(page, per_page);
        let limit = i64::from(per_page);

        let (hackathons, total) =
            HackathonRepository::list(pool, offset, limit, finished, search).await?;

        Ok((hackathons.into_iter().map(Into::into).collect(), total))
    }

    /// List hackathons owned by the caller
    pub async fn list_owned(
        pool: &PgPool,
        user: &AuthenticatedUser,
    ) -> AppResult<Vec<HackathonResponse>> {
        let hackathons = HackathonRepository::list_by_owner(pool, &user.id).await?;
        Ok(hackathons.into_iter().map(Into::into).collect())
    }

    /// Update hackathon details. A rename is copied onto its submissions.
    pub async fn update(
        pool: &PgPool,
        user: &AuthenticatedUser,
        url: &str,
        payload: UpdateHackathonRequest,
    ) -> AppResult<HackathonResponse> {
        let mut tx = pool.begin().await?;
        let hackathon = Self::find(&mut *tx, url).await?;
        MANAGE_HACKATHON.check(&AccessContext::new(user).with_hackathon(&hackathon))?;

        let name = payload.name.as_deref().map(str::trim);
        let updated = HackathonRepository::update(
            &mut *tx,
            &hackathon.id,
            name,
            payload.description.as_deref(),
            payload.rules.as_deref(),
            payload.criteria.as_deref(),
            payload.min_judges_required,
        )
        .await?;

        if updated.name != hackathon.name {
            let synced =
                ParticipationRepository::sync_hackathon_name(&mut *tx, &updated.url, &updated.name)
                    .await?;
            info!(url = %updated.url, submissions = synced, "Hackathon renamed");
        }

        tx.commit().await?;

        info!(hackathon_id = %updated.id, updated_by = %user.id, "Hackathon updated");

        Ok(updated.into())
    }

    /// Delete a hackathon and everything under it
    pub async fn delete(pool: &PgPool, user: &AuthenticatedUser, url: &str) -> AppResult<()> {
        let hackathon = Self::find(pool, url).await?;
        MANAGE_HACKATHON.check(&AccessContext::new(user).with_hackathon(&hackathon))?;

        HackathonRepository::delete(pool, &hackathon.id).await?;

        info!(hackathon_id = %hackathon.id, url = %hackathon.url, deleted_by = %user.id, "Hackathon deleted");
        Ok(())
    }

    /// Set the verified badge
    pub async fn set_verified(
        pool: &PgPool,
        user: &AuthenticatedUser,
        url: &str,
        verified: bool,
    ) -> AppResult<HackathonResponse> {
        ADMINISTER.check(&AccessContext::new(user))?;

        let hackathon = Self::find(pool, url).await?;
        let updated = HackathonRepository::set_verified(pool, &hackathon.id, verified).await?;

        info!(url = %updated.url, verified, admin_id = %user.id, "Hackathon verification changed");
        Ok(updated.into())
    }

    async fn find<'e, E>(executor: E, url: &str) -> AppResult<Hackathon>
    where
        E: sqlx::PgExecutor<'e>,
    {
        HackathonRepository::find_by_url(executor, url)
            .await?
            .ok_or_else(|| AppError::NotFound("Hackathon not found".to_string()))
    }
}
