//! Announcement service
//!
//! Announcements stay editable after a hackathon is finished.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    authorization::{AccessContext, MANAGE_HACKATHON},
    db::repositories::{AnnouncementRepository, HackathonRepository},
    error::{AppError, AppResult},
    handlers::announcements::{
        request::{CreateAnnouncementRequest, UpdateAnnouncementRequest},
        response::{AnnouncementResponse, AnnouncementsListResponse},
    },
    middleware::auth::AuthenticatedUser,
    models::Announcement,
};

/// Announcement service for business logic
pub struct AnnouncementService;

impl AnnouncementService {
    /// Post an announcement to a hackathon
    pub async fn create(
        pool: &PgPool,
        user: &AuthenticatedUser,
        hackathon_url: &str,
        payload: CreateAnnouncementRequest,
    ) -> AppResult<AnnouncementResponse> {
        let hackathon = HackathonRepository::find_by_url(pool, hackathon_url)
            .await?
            .ok_or_else(|| AppError::NotFound("Hackathon not found".to_string()))?;
        MANAGE_HACKATHON.check(&AccessContext::new(user).with_hackathon(&hackathon))?;

        let announcement = AnnouncementRepository::create(
            pool,
            &hackathon.id,
            payload.content.trim(),
            payload.highlighted.unwrap_or(false),
        )
        .await?;

        info!(
            announcement_id = %announcement.id,
            hackathon_url = %hackathon.url,
            highlighted = announcement.highlighted,
            "Announcement posted"
        );

        Ok(announcement.into())
    }

    /// List announcements: highlighted first, then newest first
    pub async fn list(pool: &PgPool, hackathon_url: &str) -> AppResult<AnnouncementsListResponse> {
        let hackathon = HackathonRepository::find_by_url(pool, hackathon_url)
            .await?
            .ok_or_else(|| AppError::NotFound("Hackathon not found".to_string()))?;

        let announcements = AnnouncementRepository::list_by_hackathon(pool, &hackathon.id).await?;

        Ok(AnnouncementsListResponse {
            announcements: announcements.into_iter().map(Into::into).collect(),
        })
    }

    /// Edit content and/or the highlight flag
    pub async fn update(
        pool: &PgPool,
        user: &AuthenticatedUser,
        announcement_id: &Uuid,
        payload: UpdateAnnouncementRequest,
    ) -> AppResult<AnnouncementResponse> {
        let announcement = Self::load_managed(pool, user, announcement_id).await?;

        let updated = AnnouncementRepository::update(
            pool,
            &announcement.id,
            payload.content.as_deref().map(str::trim),
            payload.highlighted,
        )
        .await?;

        info!(announcement_id = %updated.id, updated_by = %user.id, "Announcement updated");
        Ok(updated.into())
    }

    /// Delete an announcement
    pub async fn delete(
        pool: &PgPool,
        user: &AuthenticatedUser,
        announcement_id: &Uuid,
    ) -> AppResult<()> {
        let announcement = Self::load_managed(pool, user, announcement_id).await?;

        AnnouncementRepository::delete(pool, &announcement.id).await?;

        info!(announcement_id = %announcement.id, deleted_by = %user.id, "Announcement deleted");
        Ok(())
    }

    async fn load_managed(
        pool: &PgPool,
        user: &AuthenticatedUser,
        announcement_id: &Uuid,
    ) -> AppResult<Announcement> {
        let announcement = AnnouncementRepository::find_by_id(pool, announcement_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Announcement not found".to_string()))?;
        let hackathon = HackathonRepository::find_by_id(pool, &announcement.hackathon_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Hackathon not found".to_string()))?;

        MANAGE_HACKATHON.check(&AccessContext::new(user).with_hackathon(&hackathon))?;
        Ok(announcement)
    }
}
