//! Participation repository

use sqlx::{PgExecutor, types::Json};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Participation, TeamMember},
};

/// Repository for participation database operations
pub struct ParticipationRepository;

impl ParticipationRepository {
    /// Create a new participation.
    ///
    /// Relies on the `(creator_id, hackathon_url)` unique constraint; a
    /// duplicate surfaces as a unique violation.
    pub async fn create<'e, E>(
        executor: E,
        title: &str,
        description: Option<&str>,
        project_url: &str,
        hackathon_name: &str,
        hackathon_url: &str,
        creator_id: &Uuid,
        creator_name: &str,
        team_members: &[TeamMember],
    ) -> AppResult<Participation>
    where
        E: PgExecutor<'e>,
    {
        let participation = sqlx::query_as::<_, Participation>(
            r#"
            INSERT INTO participations (
                title, description, project_url, hackathon_name, hackathon_url,
                creator_id, creator_name, team_members
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(project_url)
        .bind(hackathon_name)
        .bind(hackathon_url)
        .bind(creator_id)
        .bind(creator_name)
        .bind(Json(team_members))
        .fetch_one(executor)
        .await?;

        Ok(participation)
    }

    /// Find participation by ID
    pub async fn find_by_id<'e, E>(executor: E, id: &Uuid) -> AppResult<Option<Participation>>
    where
        E: PgExecutor<'e>,
    {
        let participation =
            sqlx::query_as::<_, Participation>(r#"SELECT * FROM participations WHERE id = $1"#)
                .bind(id)
                .fetch_optional(executor)
                .await?;

        Ok(participation)
    }

    /// Find the participation a user submitted to a hackathon
    pub async fn find_by_creator<'e, E>(
        executor: E,
        creator_id: &Uuid,
        hackathon_url: &str,
    ) -> AppResult<Option<Participation>>
    where
        E: PgExecutor<'e>,
    {
        let participation = sqlx::query_as::<_, Participation>(
            r#"SELECT * FROM participations WHERE creator_id = $1 AND hackathon_url = $2"#,
        )
        .bind(creator_id)
        .bind(hackathon_url)
        .fetch_optional(executor)
        .await?;

        Ok(participation)
    }

    /// Update submission fields
    pub async fn update<'e, E>(
        executor: E,
        id: &Uuid,
        title: Option<&str>,
        description: Option<&str>,
        project_url: Option<&str>,
        team_members: Option<&[TeamMember]>,
    ) -> AppResult<Participation>
    where
        E: PgExecutor<'e>,
    {
        let participation = sqlx::query_as::<_, Participation>(
            r#"
            UPDATE participations
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                project_url = COALESCE($4, project_url),
                team_members = COALESCE($5, team_members),
                updated_at = clock_timestamp()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(project_url)
        .bind(team_members.map(Json))
        .fetch_one(executor)
        .await?;

        Ok(participation)
    }

    /// Delete participation (scores cascade)
    pub async fn delete<'e, E>(executor: E, id: &Uuid) -> AppResult<()>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query(r#"DELETE FROM participations WHERE id = $1"#)
            .bind(id)
            .execute(executor)
            .await?;

        Ok(())
    }

    /// List participations of a hackathon in submission order
    pub async fn list_by_hackathon<'e, E>(
        executor: E,
        hackathon_url: &str,
    ) -> AppResult<Vec<Participation>>
    where
        E: PgExecutor<'e>,
    {
        let participations = sqlx::query_as::<_, Participation>(
            r#"
            SELECT * FROM participations
            WHERE hackathon_url = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(hackathon_url)
        .fetch_all(executor)
        .await?;

        Ok(participations)
    }

    /// List participations created by a user, newest first
    pub async fn list_by_creator<'e, E>(executor: E, creator_id: &Uuid) -> AppResult<Vec<Participation>>
    where
        E: PgExecutor<'e>,
    {
        let participations = sqlx::query_as::<_, Participation>(
            r#"
            SELECT * FROM participations
            WHERE creator_id = $1
            ORDER BY created_at DESC, id
            "#,
        )
        .bind(creator_id)
        .fetch_all(executor)
        .await?;

        Ok(participations)
    }

    /// Flag a participation as reviewed
    pub async fn mark_reviewed<'e, E>(executor: E, id: &Uuid) -> AppResult<()>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query(r#"UPDATE participations SET is_reviewed = TRUE WHERE id = $1"#)
            .bind(id)
            .execute(executor)
            .await?;

        Ok(())
    }

    /// Flag the given participations of a hackathon as winners.
    ///
    /// Returns the number of rows matched; ids outside the hackathon are not touched.
    pub async fn mark_winners<'e, E>(executor: E, hackathon_url: &str, ids: &[Uuid]) -> AppResult<u64>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query(
            r#"
            UPDATE participations
            SET is_winner = TRUE, updated_at = clock_timestamp()
            WHERE hackathon_url = $1 AND id = ANY($2)
            "#,
        )
        .bind(hackathon_url)
        .bind(ids)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    /// Rewrite the denormalized hackathon name after a rename
    pub async fn sync_hackathon_name<'e, E>(
        executor: E,
        hackathon_url: &str,
        hackathon_name: &str,
    ) -> AppResult<u64>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query(
            r#"UPDATE participations SET hackathon_name = $2 WHERE hackathon_url = $1"#,
        )
        .bind(hackathon_url)
        .bind(hackathon_name)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    /// Rewrite the denormalized creator name after a rename
    pub async fn sync_creator_name<'e, E>(
        executor: E,
        creator_id: &Uuid,
        creator_name: &str,
    ) -> AppResult<u64>
    where
        E: PgExecutor<'e>,
    {
        let result =
            sqlx::query(r#"UPDATE participations SET creator_name = $2 WHERE creator_id = $1"#)
                .bind(creator_id)
                .bind(creator_name)
                .execute(executor)
                .await?;

        Ok(result.rows_affected())
    }
}
