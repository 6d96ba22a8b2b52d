//! Score repository

use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{
    error::AppResult,
    handlers::participations::response::JudgeScoreResponse,
    models::{Score, ScoreValue},
};

/// Repository for score database operations
pub struct ScoreRepository;

impl ScoreRepository {
    /// Insert or overwrite the score of a judge for a participation
    pub async fn upsert<'e, E>(
        executor: E,
        judge_id: &Uuid,
        participation_id: &Uuid,
        score: f64,
    ) -> AppResult<Score>
    where
        E: PgExecutor<'e>,
    {
        let score = sqlx::query_as::<_, Score>(
            r#"
            INSERT INTO scores (judge_id, participation_id, score)
            VALUES ($1, $2, $3)
            ON CONFLICT (judge_id, participation_id)
            DO UPDATE SET score = EXCLUDED.score, updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(judge_id)
        .bind(participation_id)
        .bind(score)
        .fetch_one(executor)
        .await?;

        Ok(score)
    }

    /// List the scores of a participation with judge details
    pub async fn list_by_participation<'e, E>(
        executor: E,
        participation_id: &Uuid,
    ) -> AppResult<Vec<JudgeScoreResponse>>
    where
        E: PgExecutor<'e>,
    {
        let scores = sqlx::query_as::<_, JudgeScoreResponse>(
            r#"
            SELECT
                s.id,
                s.judge_id,
                u.username AS judge_username,
                u.name AS judge_name,
                s.score,
                s.updated_at
            FROM scores s
            JOIN judges j ON s.judge_id = j.id
            JOIN users u ON j.user_id = u.id
            WHERE s.participation_id = $1
            ORDER BY u.username
            "#,
        )
        .bind(participation_id)
        .fetch_all(executor)
        .await?;

        Ok(scores)
    }

    /// Every score value recorded for a hackathon's participations
    pub async fn list_values_by_hackathon<'e, E>(
        executor: E,
        hackathon_url: &str,
    ) -> AppResult<Vec<ScoreValue>>
    where
        E: PgExecutor<'e>,
    {
        let values = sqlx::query_as::<_, ScoreValue>(
            r#"
            SELECT s.participation_id, s.score
            FROM scores s
            JOIN participations p ON s.participation_id = p.id
            WHERE p.hackathon_url = $1
            "#,
        )
        .bind(hackathon_url)
        .fetch_all(executor)
        .await?;

        Ok(values)
    }

    /// Count score rows for a (judge, participation) pair
    pub async fn count_for_pair<'e, E>(
        executor: E,
        judge_id: &Uuid,
        participation_id: &Uuid,
    ) -> AppResult<i64>
    where
        E: PgExecutor<'e>,
    {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM scores WHERE judge_id = $1 AND participation_id = $2"#,
        )
        .bind(judge_id)
        .bind(participation_id)
        .fetch_one(executor)
        .await?;

        Ok(count)
    }
}
