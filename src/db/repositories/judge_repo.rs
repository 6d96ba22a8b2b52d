//! Judge assignment repository

use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{error::AppResult, handlers::hackathons::response::JudgeResponse, models::Judge};

/// Repository for judge assignment database operations
pub struct JudgeRepository;

impl JudgeRepository {
    /// Create an assignment; returns `None` if the user is already assigned
    pub async fn assign<'e, E>(
        executor: E,
        user_id: &Uuid,
        hackathon_id: &Uuid,
        invited_by: &Uuid,
    ) -> AppResult<Option<Judge>>
    where
        E: PgExecutor<'e>,
    {
        let judge = sqlx::query_as::<_, Judge>(
            r#"
            INSERT INTO judges (user_id, hackathon_id, invited_by)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, hackathon_id) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(hackathon_id)
        .bind(invited_by)
        .fetch_optional(executor)
        .await?;

        Ok(judge)
    }

    /// Find the assignment of a user to a hackathon
    pub async fn find<'e, E>(executor: E, user_id: &Uuid, hackathon_id: &Uuid) -> AppResult<Option<Judge>>
    where
        E: PgExecutor<'e>,
    {
        let judge = sqlx::query_as::<_, Judge>(
            r#"SELECT * FROM judges WHERE user_id = $1 AND hackathon_id = $2"#,
        )
        .bind(user_id)
        .bind(hackathon_id)
        .fetch_optional(executor)
        .await?;

        Ok(judge)
    }

    /// Find an assignment and hold a share lock on it until the transaction ends
    pub async fn find_for_share<'e, E>(
        executor: E,
        user_id: &Uuid,
        hackathon_id: &Uuid,
    ) -> AppResult<Option<Judge>>
    where
        E: PgExecutor<'e>,
    {
        let judge = sqlx::query_as::<_, Judge>(
            r#"SELECT * FROM judges WHERE user_id = $1 AND hackathon_id = $2 FOR SHARE"#,
        )
        .bind(user_id)
        .bind(hackathon_id)
        .fetch_optional(executor)
        .await?;

        Ok(judge)
    }

    /// Check if a user judges a hackathon
    pub async fn is_assigned<'e, E>(executor: E, user_id: &Uuid, hackathon_id: &Uuid) -> AppResult<bool>
    where
        E: PgExecutor<'e>,
    {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM judges
                WHERE user_id = $1 AND hackathon_id = $2
            )
            "#,
        )
        .bind(user_id)
        .bind(hackathon_id)
        .fetch_one(executor)
        .await?;

        Ok(exists)
    }

    /// Remove an assignment (its scores cascade). Returns rows removed.
    pub async fn remove<'e, E>(executor: E, user_id: &Uuid, hackathon_id: &Uuid) -> AppResult<u64>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query(r#"DELETE FROM judges WHERE user_id = $1 AND hackathon_id = $2"#)
            .bind(user_id)
            .bind(hackathon_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    /// List judges of a hackathon with their user details
    pub async fn list_by_hackathon<'e, E>(executor: E, hackathon_id: &Uuid) -> AppResult<Vec<JudgeResponse>>
    where
        E: PgExecutor<'e>,
    {
        let judges = sqlx::query_as::<_, JudgeResponse>(
            r#"
            SELECT
                j.id,
                j.user_id,
                u.username,
                u.name,
                u.image,
                j.invited_by,
                j.created_at
            FROM judges j
            JOIN users u ON j.user_id = u.id
            WHERE j.hackathon_id = $1
            ORDER BY j.created_at, j.id
            "#,
        )
        .bind(hackathon_id)
        .fetch_all(executor)
        .await?;

        Ok(judges)
    }
}
