//! Announcement repository

use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{error::AppResult, models::Announcement};

/// Repository for announcement database operations
pub struct AnnouncementRepository;

impl AnnouncementRepository {
    /// Create a new announcement
    pub async fn create<'e, E>(
        executor: E,
        hackathon_id: &Uuid,
        content: &str,
        highlighted: bool,
    ) -> AppResult<Announcement>
    where
        E: PgExecutor<'e>,
    {
        let announcement = sqlx::query_as::<_, Announcement>(
            r#"
            INSERT INTO announcements (hackathon_id, content, highlighted)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(hackathon_id)
        .bind(content)
        .bind(highlighted)
        .fetch_one(executor)
        .await?;

        Ok(announcement)
    }

    /// Find announcement by ID
    pub async fn find_by_id<'e, E>(executor: E, id: &Uuid) -> AppResult<Option<Announcement>>
    where
        E: PgExecutor<'e>,
    {
        let announcement =
            sqlx::query_as::<_, Announcement>(r#"SELECT * FROM announcements WHERE id = $1"#)
                .bind(id)
                .fetch_optional(executor)
                .await?;

        Ok(announcement)
    }

    /// Update content and/or highlight flag
    pub async fn update<'e, E>(
        executor: E,
        id: &Uuid,
        content: Option<&str>,
        highlighted: Option<bool>,
    ) -> AppResult<Announcement>
    where
        E: PgExecutor<'e>,
    {
        let announcement = sqlx::query_as::<_, Announcement>(
            r#"
            UPDATE announcements
            SET
                content = COALESCE($2, content),
                highlighted = COALESCE($3, highlighted),
                updated_at = clock_timestamp()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(content)
        .bind(highlighted)
        .fetch_one(executor)
        .await?;

        Ok(announcement)
    }

    /// Delete announcement
    pub async fn delete<'e, E>(executor: E, id: &Uuid) -> AppResult<()>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query(r#"DELETE FROM announcements WHERE id = $1"#)
            .bind(id)
            .execute(executor)
            .await?;

        Ok(())
    }

    /// List announcements: highlighted first, then newest first
    pub async fn list_by_hackathon<'e, E>(executor: E, hackathon_id: &Uuid) -> AppResult<Vec<Announcement>>
    where
        E: PgExecutor<'e>,
    {
        let announcements = sqlx::query_as::<_, Announcement>(
            r#"
            SELECT * FROM announcements
            WHERE hackathon_id = $1
            ORDER BY highlighted DESC, created_at DESC, id
            "#,
        )
        .bind(hackathon_id)
        .fetch_all(executor)
        .await?;

        Ok(announcements)
    }
}
