//! Scoring service
//!
//! Judge assignment, score ingestion, leaderboard aggregation, winners and
//! the finish transition.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    authorization::{AccessContext, MANAGE_HACKATHON, SCORE, VIEW_REVIEWS},
    config::ScoringConfig,
    db::repositories::{
        HackathonRepository, JudgeRepository, ParticipationRepository, ScoreRepository,
        UserRepository,
    },
    error::{AppError, AppResult},
    handlers::{
        hackathons::response::{
            HackathonResponse, JudgeResponse, JudgesListResponse, LeaderboardEntry,
            LeaderboardResponse, WinnersResponse,
        },
        participations::response::{ScoreResponse, ScoresListResponse},
    },
    middleware::auth::AuthenticatedUser,
    models::{Hackathon, Participation, ScoreValue},
    services::SubmissionService,
};

/// Scoring service for business logic
pub struct ScoringService;

impl ScoringService {
    /// Assign a user as judge. Assigning twice returns the existing assignment.
    pub async fn assign_judge(
        pool: &PgPool,
        user: &AuthenticatedUser,
        hackathon_url: &str,
        judge_username: &str,
    ) -> AppResult<JudgeResponse> {
        let mut tx = pool.begin().await?;
        let hackathon = Self::find_hackathon(&mut *tx, hackathon_url).await?;
        MANAGE_HACKATHON.check(&AccessContext::new(user).with_hackathon(&hackathon))?;
        let hackathon = SubmissionService::lock_open_hackathon(&mut tx, &hackathon.url).await?;

        let target = UserRepository::find_by_username(&mut *tx, judge_username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", judge_username)))?;

        let judge = match JudgeRepository::assign(&mut *tx, &target.id, &hackathon.id, &user.id).await? {
            Some(judge) => {
                info!(
                    hackathon_url = %hackathon.url,
                    judge_user_id = %target.id,
                    invited_by = %user.id,
                    "Judge assigned"
                );
                judge
            }
            None => JudgeRepository::find(&mut *tx, &target.id, &hackathon.id)
                .await?
                .ok_or_else(|| AppError::NotFound("Judge assignment not found".to_string()))?,
        };

        tx.commit().await?;

        Ok(JudgeResponse {
            id: judge.id,
            user_id: target.id,
            username: target.username,
            name: target.name,
            image: target.image,
            invited_by: judge.invited_by,
            created_at: judge.created_at,
        })
    }

    /// Remove a judge assignment and its scores. Removing a non-judge is a no-op.
    pub async fn remove_judge(
        pool: &PgPool,
        user: &AuthenticatedUser,
        hackathon_url: &str,
        judge_username: &str,
    ) -> AppResult<()> {
        let mut tx = pool.begin().await?;
        let hackathon = Self::find_hackathon(&mut *tx, hackathon_url).await?;
        MANAGE_HACKATHON.check(&AccessContext::new(user).with_hackathon(&hackathon))?;
        let hackathon = SubmissionService::lock_open_hackathon(&mut tx, &hackathon.url).await?;

        let target = UserRepository::find_by_username(&mut *tx, judge_username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", judge_username)))?;

        let removed = JudgeRepository::remove(&mut *tx, &target.id, &hackathon.id).await?;
        tx.commit().await?;

        if removed > 0 {
            info!(
                hackathon_url = %hackathon.url,
                judge_user_id = %target.id,
                removed_by = %user.id,
                "Judge removed"
            );
        }

        Ok(())
    }

    /// List the judges of a hackathon
    pub async fn list_judges(
        pool: &PgPool,
        user: &AuthenticatedUser,
        hackathon_url: &str,
    ) -> AppResult<JudgesListResponse> {
        let hackathon = Self::find_hackathon(pool, hackathon_url).await?;
        Self::check_can_view_reviews(pool, user, &hackathon).await?;

        let judges = JudgeRepository::list_by_hackathon(pool, &hackathon.id).await?;
        Ok(JudgesListResponse { judges })
    }

    /// Record or overwrite the caller's score for a participation
    pub async fn record_score(
        pool: &PgPool,
        scoring: &ScoringConfig,
        user: &AuthenticatedUser,
        participation_id: &Uuid,
        score: f64,
    ) -> AppResult<ScoreResponse> {
        if !scoring.contains(score) {
            return Err(AppError::Validation(format!(
                "Score must be a number between {} and {}",
                scoring.score_min, scoring.score_max
            )));
        }

        let mut tx = pool.begin().await?;

        let participation = ParticipationRepository::find_by_id(&mut *tx, participation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;
        let hackathon = Self::find_hackathon(&mut *tx, &participation.hackathon_url).await?;

        let assigned = JudgeRepository::is_assigned(&mut *tx, &user.id, &hackathon.id).await?;
        SCORE.check(
            &AccessContext::new(user)
                .with_hackathon(&hackathon)
                .with_judge_assignment(assigned),
        )?;

        SubmissionService::lock_open_hackathon(&mut tx, &hackathon.url).await?;

        // Re-read under lock: a removal committed since the check revokes the right to score
        let judge = JudgeRepository::find_for_share(&mut *tx, &user.id, &hackathon.id)
            .await?
            .ok_or_else(|| {
                AppError::Forbidden("Not assigned as a judge of this hackathon".to_string())
            })?;

        let stored = ScoreRepository::upsert(&mut *tx, &judge.id, &participation.id, score).await?;
        ParticipationRepository::mark_reviewed(&mut *tx, &participation.id).await?;

        tx.commit().await?;

        info!(
            participation_id = %participation.id,
            judge_id = %judge.id,
            score = stored.score,
            "Score recorded"
        );

        Ok(stored.into())
    }

    /// List per-judge scores of a participation
    pub async fn list_scores(
        pool: &PgPool,
        user: &AuthenticatedUser,
        participation_id: &Uuid,
    ) -> AppResult<ScoresListResponse> {
        let participation = ParticipationRepository::find_by_id(pool, participation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;
        let hackathon = Self::find_hackathon(pool, &participation.hackathon_url).await?;
        Self::check_can_view_reviews(pool, user, &hackathon).await?;

        let scores = ScoreRepository::list_by_participation(pool, &participation.id).await?;
        let average_score = average(scores.iter().map(|s| s.score).collect());

        Ok(ScoresListResponse {
            participation_id: participation.id,
            scores,
            average_score,
        })
    }

    /// Rank the participations of a hackathon by average judge score
    pub async fn compute_leaderboard(
        pool: &PgPool,
        user: &AuthenticatedUser,
        hackathon_url: &str,
    ) -> AppResult<LeaderboardResponse> {
        let hackathon = Self::find_hackathon(pool, hackathon_url).await?;
        Self::check_can_view_reviews(pool, user, &hackathon).await?;

        // One snapshot for both reads
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;
        let participations = ParticipationRepository::list_by_hackathon(&mut *tx, &hackathon.url).await?;
        let scores = ScoreRepository::list_values_by_hackathon(&mut *tx, &hackathon.url).await?;
        tx.commit().await?;

        let entries = build_leaderboard(participations, &scores, hackathon.min_judges_required);

        Ok(LeaderboardResponse {
            hackathon_id: hackathon.id,
            hackathon_url: hackathon.url,
            is_finished: hackathon.is_finished,
            min_judges_required: hackathon.min_judges_required,
            entries,
        })
    }

    /// Flag participations of a finished hackathon as winners.
    ///
    /// All ids must belong to the hackathon; otherwise nothing is written.
    pub async fn mark_winners(
        pool: &PgPool,
        user: &AuthenticatedUser,
        hackathon_url: &str,
        participation_ids: Vec<Uuid>,
    ) -> AppResult<WinnersResponse> {
        let mut ids = participation_ids;
        ids.sort_unstable();
        ids.dedup();

        let mut tx = pool.begin().await?;
        let hackathon = Self::find_hackathon(&mut *tx, hackathon_url).await?;
        MANAGE_HACKATHON.check(&AccessContext::new(user).with_hackathon(&hackathon))?;

        if hackathon.is_open() {
            return Err(AppError::Validation(
                "Winners can only be marked after the hackathon is finished".to_string(),
            ));
        }

        let marked = ParticipationRepository::mark_winners(&mut *tx, &hackathon.url, &ids).await?;
        if marked != ids.len() as u64 {
            // Dropping the transaction rolls back the partial update
            return Err(AppError::NotFound(
                "One or more submissions do not belong to this hackathon".to_string(),
            ));
        }

        tx.commit().await?;

        info!(hackathon_url = %hackathon.url, winners = ids.len(), marked_by = %user.id, "Winners marked");

        Ok(WinnersResponse {
            hackathon_url: hackathon.url,
            winners: ids,
        })
    }

    /// Finish a hackathon. Finishing twice is a no-op.
    pub async fn finish(
        pool: &PgPool,
        user: &AuthenticatedUser,
        hackathon_url: &str,
    ) -> AppResult<HackathonResponse> {
        let hackathon = Self::find_hackathon(pool, hackathon_url).await?;
        MANAGE_HACKATHON.check(&AccessContext::new(user).with_hackathon(&hackathon))?;

        let finished = HackathonRepository::finish(pool, &hackathon.id).await?;

        if hackathon.is_open() {
            info!(hackathon_url = %finished.url, finished_by = %user.id, "Hackathon finished");
        }

        Ok(finished.into())
    }

    async fn find_hackathon<'e, E>(executor: E, hackathon_url: &str) -> AppResult<Hackathon>
    where
        E: sqlx::PgExecutor<'e>,
    {
        HackathonRepository::find_by_url(executor, hackathon_url)
            .await?
            .ok_or_else(|| AppError::NotFound("Hackathon not found".to_string()))
    }

    async fn check_can_view_reviews(
        pool: &PgPool,
        user: &AuthenticatedUser,
        hackathon: &Hackathon,
    ) -> AppResult<()> {
        let is_judge = JudgeRepository::is_assigned(pool, &user.id, &hackathon.id).await?;
        VIEW_REVIEWS.check(
            &AccessContext::new(user)
                .with_hackathon(hackathon)
                .with_judge_assignment(is_judge),
        )
    }
}

/// Mean of the values, summed in ascending order so the result does not
/// depend on the order rows were read in
fn average(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Rank participations by average score.
///
/// Ordering: average descending, unscored entries last, ties by earliest
/// submission then by id.
pub fn build_leaderboard(
    participations: Vec<Participation>,
    scores: &[ScoreValue],
    min_judges_required: i32,
) -> Vec<LeaderboardEntry> {
    let mut by_participation: BTreeMap<Uuid, Vec<f64>> = BTreeMap::new();
    for value in scores {
        by_participation
            .entry(value.participation_id)
            .or_default()
            .push(value.score);
    }

    let mut ranked: Vec<(Participation, Option<f64>, u32)> = participations
        .into_iter()
        .map(|p| {
            let values = by_participation.remove(&p.id).unwrap_or_default();
            let judge_count = values.len() as u32;
            (p, average(values), judge_count)
        })
        .collect();

    ranked.sort_by(|(a, avg_a, _), (b, avg_b, _)| {
        compare_averages(*avg_a, *avg_b)
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    });

    let min_judges = min_judges_required.max(0) as u32;

    ranked
        .into_iter()
        .enumerate()
        .map(|(i, (p, average_score, judge_count))| LeaderboardEntry {
            rank: i as u32 + 1,
            participation_id: p.id,
            title: p.title,
            project_url: p.project_url,
            creator_id: p.creator_id,
            creator_name: p.creator_name,
            is_winner: p.is_winner,
            average_score,
            judge_count,
            meets_min_judges: judge_count >= min_judges,
            submitted_at: p.created_at,
        })
        .collect()
}

/// Higher averages first; `None` after any score
fn compare_averages(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use sqlx::types::Json;

    fn participation(title: &str, minutes: i64) -> Participation {
        let created_at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap() + Duration::minutes(minutes);
        Participation {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            project_url: format!("https://example.com/{}", title),
            hackathon_name: "Hack".to_string(),
            hackathon_url: "hack".to_string(),
            creator_id: Uuid::new_v4(),
            creator_name: title.to_string(),
            is_reviewed: false,
            is_winner: false,
            team_members: Json(Vec::new()),
            created_at,
            updated_at: created_at,
        }
    }

    fn score(p: &Participation, value: f64) -> ScoreValue {
        ScoreValue {
            participation_id: p.id,
            score: value,
        }
    }

    fn titles(entries: &[LeaderboardEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_reference_scenario() {
        let p1 = participation("p1", 0);
        let p2 = participation("p2", 1);
        let p3 = participation("p3", 2);
        let scores = vec![score(&p1, 8.0), score(&p1, 6.0), score(&p2, 10.0)];

        let entries = build_leaderboard(vec![p1, p2, p3], &scores, 2);

        assert_eq!(titles(&entries), vec!["p2", "p1", "p3"]);
        assert_eq!(entries[0].average_score, Some(10.0));
        assert_eq!(entries[0].judge_count, 1);
        assert!(!entries[0].meets_min_judges);
        assert_eq!(entries[1].average_score, Some(7.0));
        assert_eq!(entries[1].judge_count, 2);
        assert!(entries[1].meets_min_judges);
        assert_eq!(entries[2].average_score, None);
        assert_eq!(entries[2].judge_count, 0);
        assert_eq!(
            entries.iter().map(|e| e.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_independent_of_input_order() {
        let p1 = participation("p1", 0);
        let p2 = participation("p2", 1);
        let p3 = participation("p3", 2);
        let scores = vec![
            score(&p1, 0.1),
            score(&p1, 0.2),
            score(&p1, 0.3),
            score(&p2, 0.3),
            score(&p2, 0.1),
            score(&p2, 0.2),
            score(&p3, 5.0),
        ];
        let mut reversed_scores = scores.clone();
        reversed_scores.reverse();

        let forward = build_leaderboard(vec![p1.clone(), p2.clone(), p3.clone()], &scores, 1);
        let backward = build_leaderboard(vec![p3, p2, p1], &reversed_scores, 1);

        let key = |entries: &[LeaderboardEntry]| {
            entries
                .iter()
                .map(|e| (e.participation_id, e.average_score.map(f64::to_bits)))
                .collect::<Vec<_>>()
        };
        assert_eq!(key(&forward), key(&backward));
        assert_eq!(titles(&forward), vec!["p3", "p1", "p2"]);
    }

    #[test]
    fn test_unscored_rank_below_zero_scores() {
        let unscored = participation("unscored", 0);
        let zero = participation("zero", 5);
        let scores = vec![score(&zero, 0.0)];

        let entries = build_leaderboard(vec![unscored, zero], &scores, 1);
        assert_eq!(titles(&entries), vec!["zero", "unscored"]);
    }

    #[test]
    fn test_ties_broken_by_submission_time_then_id() {
        let late = participation("late", 10);
        let early = participation("early", 0);
        let scores = vec![score(&late, 7.0), score(&early, 7.0)];

        let entries = build_leaderboard(vec![late, early], &scores, 1);
        assert_eq!(titles(&entries), vec!["early", "late"]);

        let mut a = participation("a", 0);
        let mut b = participation("b", 0);
        a.id = Uuid::from_u128(2);
        b.id = Uuid::from_u128(1);
        let entries = build_leaderboard(vec![a, b], &[], 1);
        assert_eq!(titles(&entries), vec!["b", "a"]);
    }

    #[test]
    fn test_scores_of_other_hackathons_are_ignored() {
        let p = participation("p", 0);
        let stray = ScoreValue {
            participation_id: Uuid::new_v4(),
            score: 10.0,
        };
        let entries = build_leaderboard(vec![p], &[stray], 1);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].average_score, None);
    }

    #[test]
    fn test_average() {
        assert_eq!(average(vec![]), None);
        assert_eq!(average(vec![8.0, 6.0]), Some(7.0));
    }
}
