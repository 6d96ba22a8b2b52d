//! Hackathon repository

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::{error::AppResult, models::Hackathon};

/// Repository for hackathon database operations
pub struct HackathonRepository;

impl HackathonRepository {
    /// Create a new hackathon
    pub async fn create<'e, E>(
        executor: E,
        name: &str,
        url: &str,
        description: Option<&str>,
        rules: Option<&str>,
        criteria: Option<&str>,
        owner_id: &Uuid,
        min_judges_required: i32,
    ) -> AppResult<Hackathon>
    where
        E: PgExecutor<'e>,
    {
        let hackathon = sqlx::query_as::<_, Hackathon>(
            r#"
            INSERT INTO hackathons (name, url, description, rules, criteria, owner_id, min_judges_required)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(url)
        .bind(description)
        .bind(rules)
        .bind(criteria)
        .bind(owner_id)
        .bind(min_judges_required)
        .fetch_one(executor)
        .await?;

        Ok(hackathon)
    }

    /// Find hackathon by ID
    pub async fn find_by_id<'e, E>(executor: E, id: &Uuid) -> AppResult<Option<Hackathon>>
    where
        E: PgExecutor<'e>,
    {
        let hackathon = sqlx::query_as::<_, Hackathon>(r#"SELECT * FROM hackathons WHERE id = $1"#)
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(hackathon)
    }

    /// Find hackathon by url
    pub async fn find_by_url<'e, E>(executor: E, url: &str) -> AppResult<Option<Hackathon>>
    where
        E: PgExecutor<'e>,
    {
        let hackathon = sqlx::query_as::<_, Hackathon>(r#"SELECT * FROM hackathons WHERE url = $1"#)
            .bind(url)
            .fetch_optional(executor)
            .await?;

        Ok(hackathon)
    }

    /// Find hackathon by url and hold a shared row lock until the transaction ends.
    ///
    /// `finish` updates the same row, so it waits for every open mutation
    /// holding this lock and vice versa.
    pub async fn find_by_url_for_share<'e, E>(executor: E, url: &str) -> AppResult<Option<Hackathon>>
    where
        E: PgExecutor<'e>,
    {
        let hackathon = sqlx::query_as::<_, Hackathon>(
            r#"SELECT * FROM hackathons WHERE url = $1 FOR SHARE"#,
        )
        .bind(url)
        .fetch_optional(executor)
        .await?;

        Ok(hackathon)
    }

    /// Update mutable hackathon fields (the url never changes)
    pub async fn update<'e, E>(
        executor: E,
        id: &Uuid,
        name: Option<&str>,
        description: Option<&str>,
        rules: Option<&str>,
        criteria: Option<&str>,
        min_judges_required: Option<i32>,
    ) -> AppResult<Hackathon>
    where
        E: PgExecutor<'e>,
    {
        let hackathon = sqlx::query_as::<_, Hackathon>(
            r#"
            UPDATE hackathons
            SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                rules = COALESCE($4, rules),
                criteria = COALESCE($5, criteria),
                min_judges_required = COALESCE($6, min_judges_required),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(rules)
        .bind(criteria)
        .bind(min_judges_required)
        .fetch_one(executor)
        .await?;

        Ok(hackathon)
    }

    /// Set the terminal finished flag. Finishing twice keeps the original timestamp.
    pub async fn finish<'e, E>(executor: E, id: &Uuid) -> AppResult<Hackathon>
    where
        E: PgExecutor<'e>,
    {
        let hackathon = sqlx::query_as::<_, Hackathon>(
            r#"
            UPDATE hackathons
            SET
                is_finished = TRUE,
                updated_at = CASE WHEN is_finished THEN updated_at ELSE NOW() END
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_one(executor)
        .await?;

        Ok(hackathon)
    }

    /// Set the verified flag
    pub async fn set_verified<'e, E>(executor: E, id: &Uuid, verified: bool) -> AppResult<Hackathon>
    where
        E: PgExecutor<'e>,
    {
        let hackathon = sqlx::query_as::<_, Hackathon>(
            r#"
            UPDATE hackathons
            SET verified = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(verified)
        .fetch_one(executor)
        .await?;

        Ok(hackathon)
    }

    /// Delete hackathon (participations, judges and announcements cascade)
    pub async fn delete<'e, E>(executor: E, id: &Uuid) -> AppResult<()>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query(r#"DELETE FROM hackathons WHERE id = $1"#)
            .bind(id)
            .execute(executor)
            .await?;

        Ok(())
    }

    /// List hackathons with pagination
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        finished: Option<bool>,
        search: Option<&str>,
    ) -> AppResult<(Vec<Hackathon>, i64)> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let hackathons = sqlx::query_as::<_, Hackathon>(
            r#"
            SELECT * FROM hackathons
            WHERE
                ($1::boolean IS NULL OR is_finished = $1)
                AND ($2::text IS NULL OR name ILIKE $2)
            ORDER BY created_at DESC, id
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(finished)
        .bind(&search_pattern)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool);

        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM hackathons
            WHERE
                ($1::boolean IS NULL OR is_finished = $1)
                AND ($2::text IS NULL OR name ILIKE $2)
            "#,
        )
        .bind(finished)
        .bind(&search_pattern)
        .fetch_one(pool);

        let (hackathons, count) = futures::try_join!(hackathons, count)?;
        Ok((hackathons, count))
    }

    /// List hackathons created by a user
    pub async fn list_by_owner<'e, E>(executor: E, owner_id: &Uuid) -> AppResult<Vec<Hackathon>>
    where
        E: PgExecutor<'e>,
    {
        let hackathons = sqlx::query_as::<_, Hackathon>(
            r#"SELECT * FROM hackathons WHERE owner_id = $1 ORDER BY created_at DESC, id"#,
        )
        .bind(owner_id)
        .fetch_all(executor)
        .await?;

        Ok(hackathons)
    }
}
