//! Judge assignment, scoring, leaderboard, winners and finish against a real database

mod common;

use common::{create_hackathon, create_user, setup, submit};
use hackcontrol::{
    config::ScoringConfig,
    db::repositories::{HackathonRepository, JudgeRepository, ParticipationRepository, ScoreRepository},
    error::AppError,
    models::Role,
    services::{ScoringService, SubmissionService},
};
use tokio_test::assert_ok;
use uuid::Uuid;

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn rescoring_overwrites_the_previous_score() {
    let db = setup().await;
    let scoring = ScoringConfig::default();
    let organizer = create_user(&db.pool, "org", Role::Organizer).await;
    let judge = create_user(&db.pool, "judge", Role::User).await;
    let alice = create_user(&db.pool, "alice", Role::User).await;
    let hackathon = create_hackathon(&db.pool, &organizer, "rust-fest", 1).await;
    let p = submit(&db.pool, &alice, "rust-fest", "alpha").await;

    ScoringService::assign_judge(&db.pool, &organizer, "rust-fest", "judge")
        .await
        .unwrap();
    ScoringService::record_score(&db.pool, &scoring, &judge, &p.id, 4.0)
        .await
        .unwrap();
    let second = ScoringService::record_score(&db.pool, &scoring, &judge, &p.id, 9.5)
        .await
        .unwrap();

    let assignment = JudgeRepository::find(&db.pool, &judge.id, &hackathon.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        ScoreRepository::count_for_pair(&db.pool, &assignment.id, &p.id)
            .await
            .unwrap(),
        1
    );
    assert_eq!(second.score, 9.5);

    let scores = ScoringService::list_scores(&db.pool, &organizer, &p.id)
        .await
        .unwrap();
    assert_eq!(scores.scores.len(), 1);
    assert_eq!(scores.average_score, Some(9.5));

    let stored = ParticipationRepository::find_by_id(&db.pool, &p.id)
        .await
        .unwrap()
        .unwrap();
    assert!(stored.is_reviewed);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn unassigned_judge_is_forbidden() {
    let db = setup().await;
    let scoring = ScoringConfig::default();
    let organizer = create_user(&db.pool, "org", Role::Organizer).await;
    let admin = create_user(&db.pool, "root", Role::Admin).await;
    let stranger = create_user(&db.pool, "stranger", Role::User).await;
    let alice = create_user(&db.pool, "alice", Role::User).await;
    create_hackathon(&db.pool, &organizer, "rust-fest", 1).await;
    let p = submit(&db.pool, &alice, "rust-fest", "alpha").await;

    for caller in [&stranger, &organizer, &admin] {
        let err = ScoringService::record_score(&db.pool, &scoring, caller, &p.id, 5.0)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn out_of_range_scores_are_rejected() {
    let db = setup().await;
    let scoring = ScoringConfig::default();
    let organizer = create_user(&db.pool, "org", Role::Organizer).await;
    let judge = create_user(&db.pool, "judge", Role::User).await;
    let alice = create_user(&db.pool, "alice", Role::User).await;
    create_hackathon(&db.pool, &organizer, "rust-fest", 1).await;
    let p = submit(&db.pool, &alice, "rust-fest", "alpha").await;
    ScoringService::assign_judge(&db.pool, &organizer, "rust-fest", "judge")
        .await
        .unwrap();

    for bad in [-1.0, 10.5, f64::NAN] {
        let err = ScoringService::record_score(&db.pool, &scoring, &judge, &p.id, bad)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    let err = ScoringService::record_score(&db.pool, &scoring, &judge, &Uuid::new_v4(), 5.0)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn judge_assignment_is_idempotent_and_owner_only() {
    let db = setup().await;
    let organizer = create_user(&db.pool, "org", Role::Organizer).await;
    let other_organizer = create_user(&db.pool, "other", Role::Organizer).await;
    let admin = create_user(&db.pool, "root", Role::Admin).await;
    create_user(&db.pool, "judge", Role::User).await;
    create_hackathon(&db.pool, &organizer, "rust-fest", 1).await;

    let first = ScoringService::assign_judge(&db.pool, &organizer, "rust-fest", "judge")
        .await
        .unwrap();
    let again = ScoringService::assign_judge(&db.pool, &admin, "rust-fest", "judge")
        .await
        .unwrap();
    assert_eq!(first.id, again.id);
    assert_eq!(again.invited_by, organizer.id);

    let err = ScoringService::assign_judge(&db.pool, &other_organizer, "rust-fest", "judge")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    let err = ScoringService::assign_judge(&db.pool, &organizer, "rust-fest", "ghost")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let judges = ScoringService::list_judges(&db.pool, &organizer, "rust-fest")
        .await
        .unwrap();
    assert_eq!(judges.judges.len(), 1);
    assert_eq!(judges.judges[0].username, "judge");
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn removing_a_judge_drops_their_scores() {
    let db = setup().await;
    let scoring = ScoringConfig::default();
    let organizer = create_user(&db.pool, "org", Role::Organizer).await;
    let judge = create_user(&db.pool, "judge", Role::User).await;
    let alice = create_user(&db.pool, "alice", Role::User).await;
    create_hackathon(&db.pool, &organizer, "rust-fest", 1).await;
    let p = submit(&db.pool, &alice, "rust-fest", "alpha").await;
    ScoringService::assign_judge(&db.pool, &organizer, "rust-fest", "judge")
        .await
        .unwrap();
    ScoringService::record_score(&db.pool, &scoring, &judge, &p.id, 6.0)
        .await
        .unwrap();

    assert_ok!(ScoringService::remove_judge(&db.pool, &organizer, "rust-fest", "judge").await);
    // Removing again is a no-op
    assert_ok!(ScoringService::remove_judge(&db.pool, &organizer, "rust-fest", "judge").await);

    let scores = ScoringService::list_scores(&db.pool, &organizer, &p.id)
        .await
        .unwrap();
    assert!(scores.scores.is_empty());

    let err = ScoringService::record_score(&db.pool, &scoring, &judge, &p.id, 6.0)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn leaderboard_ranks_by_average_with_unscored_last() {
    let db = setup().await;
    let scoring = ScoringConfig::default();
    let organizer = create_user(&db.pool, "org", Role::Organizer).await;
    let j1 = create_user(&db.pool, "j1", Role::User).await;
    let j2 = create_user(&db.pool, "j2", Role::User).await;
    let u1 = create_user(&db.pool, "u1", Role::User).await;
    let u2 = create_user(&db.pool, "u2", Role::User).await;
    let u3 = create_user(&db.pool, "u3", Role::User).await;
    create_hackathon(&db.pool, &organizer, "rust-fest", 2).await;

    let p1 = submit(&db.pool, &u1, "rust-fest", "p1").await;
    let p2 = submit(&db.pool, &u2, "rust-fest", "p2").await;
    let p3 = submit(&db.pool, &u3, "rust-fest", "p3").await;

    for username in ["j1", "j2"] {
        ScoringService::assign_judge(&db.pool, &organizer, "rust-fest", username)
            .await
            .unwrap();
    }
    ScoringService::record_score(&db.pool, &scoring, &j1, &p1.id, 8.0).await.unwrap();
    ScoringService::record_score(&db.pool, &scoring, &j2, &p1.id, 6.0).await.unwrap();
    ScoringService::record_score(&db.pool, &scoring, &j1, &p2.id, 10.0).await.unwrap();

    let board = ScoringService::compute_leaderboard(&db.pool, &j2, "rust-fest")
        .await
        .unwrap();
    let summary: Vec<_> = board
        .entries
        .iter()
        .map(|e| (e.participation_id, e.average_score, e.judge_count))
        .collect();
    assert_eq!(
        summary,
        vec![
            (p2.id, Some(10.0), 1),
            (p1.id, Some(7.0), 2),
            (p3.id, None, 0),
        ]
    );
    assert!(!board.entries[0].meets_min_judges);
    assert!(board.entries[1].meets_min_judges);

    // Reading twice yields the same result
    let again = ScoringService::compute_leaderboard(&db.pool, &organizer, "rust-fest")
        .await
        .unwrap();
    let ids: Vec<_> = again.entries.iter().map(|e| e.participation_id).collect();
    assert_eq!(ids, vec![p2.id, p1.id, p3.id]);

    let err = ScoringService::compute_leaderboard(&db.pool, &u1, "rust-fest")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn finish_locks_scoring_and_judging() {
    let db = setup().await;
    let scoring = ScoringConfig::default();
    let organizer = create_user(&db.pool, "org", Role::Organizer).await;
    let judge = create_user(&db.pool, "judge", Role::User).await;
    create_user(&db.pool, "late-judge", Role::User).await;
    let alice = create_user(&db.pool, "alice", Role::User).await;
    create_hackathon(&db.pool, &organizer, "rust-fest", 1).await;
    let p = submit(&db.pool, &alice, "rust-fest", "alpha").await;
    ScoringService::assign_judge(&db.pool, &organizer, "rust-fest", "judge")
        .await
        .unwrap();

    let finished = ScoringService::finish(&db.pool, &organizer, "rust-fest")
        .await
        .unwrap();
    assert!(finished.is_finished);

    let err = ScoringService::record_score(&db.pool, &scoring, &judge, &p.id, 5.0)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Locked(_)));

    let err = ScoringService::assign_judge(&db.pool, &organizer, "rust-fest", "late-judge")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Locked(_)));

    let err = ScoringService::remove_judge(&db.pool, &organizer, "rust-fest", "judge")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Locked(_)));

    // Finishing again changes nothing
    let again = ScoringService::finish(&db.pool, &organizer, "rust-fest")
        .await
        .unwrap();
    assert!(again.is_finished);
    assert_eq!(again.updated_at, finished.updated_at);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn winners_require_a_finished_hackathon() {
    let db = setup().await;
    let organizer = create_user(&db.pool, "org", Role::Organizer).await;
    let alice = create_user(&db.pool, "alice", Role::User).await;
    let bob = create_user(&db.pool, "bob", Role::User).await;
    create_hackathon(&db.pool, &organizer, "rust-fest", 1).await;
    let p = submit(&db.pool, &alice, "rust-fest", "alpha").await;
    let q = submit(&db.pool, &bob, "rust-fest", "beta").await;

    let err = ScoringService::mark_winners(&db.pool, &organizer, "rust-fest", vec![p.id])
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    ScoringService::finish(&db.pool, &organizer, "rust-fest")
        .await
        .unwrap();

    let err = ScoringService::mark_winners(&db.pool, &alice, "rust-fest", vec![p.id])
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    let winners =
        ScoringService::mark_winners(&db.pool, &organizer, "rust-fest", vec![p.id, p.id])
            .await
            .unwrap();
    assert_eq!(winners.winners, vec![p.id]);

    let stored = SubmissionService::get(&db.pool, &p.id).await.unwrap();
    assert!(stored.is_winner);
    let other = SubmissionService::get(&db.pool, &q.id).await.unwrap();
    assert!(!other.is_winner);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn foreign_winner_ids_write_nothing() {
    let db = setup().await;
    let organizer = create_user(&db.pool, "org", Role::Organizer).await;
    let alice = create_user(&db.pool, "alice", Role::User).await;
    create_hackathon(&db.pool, &organizer, "rust-fest", 1).await;
    create_hackathon(&db.pool, &organizer, "go-fest", 1).await;
    let p = submit(&db.pool, &alice, "rust-fest", "alpha").await;
    let elsewhere = submit(&db.pool, &alice, "go-fest", "gamma").await;
    ScoringService::finish(&db.pool, &organizer, "rust-fest")
        .await
        .unwrap();

    let err = ScoringService::mark_winners(
        &db.pool,
        &organizer,
        "rust-fest",
        vec![p.id, elsewhere.id],
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let stored = SubmissionService::get(&db.pool, &p.id).await.unwrap();
    assert!(!stored.is_winner);

    let hackathon = HackathonRepository::find_by_url(&db.pool, "rust-fest")
        .await
        .unwrap()
        .unwrap();
    assert!(hackathon.is_finished);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn any_number_of_winners_can_be_marked() {
    let db = setup().await;
    let organizer = create_user(&db.pool, "org", Role::Organizer).await;
    create_hackathon(&db.pool, &organizer, "rust-fest", 1).await;

    let mut ids = Vec::new();
    for i in 0..101 {
        let hacker = create_user(&db.pool, &format!("hacker{}", i), Role::User).await;
        let p = submit(&db.pool, &hacker, "rust-fest", &format!("project-{}", i)).await;
        ids.push(p.id);
    }
    ScoringService::finish(&db.pool, &organizer, "rust-fest")
        .await
        .unwrap();

    let winners = ScoringService::mark_winners(&db.pool, &organizer, "rust-fest", ids)
        .await
        .unwrap();
    assert_eq!(winners.winners.len(), 101);

    let listed = SubmissionService::list_by_hackathon(&db.pool, "rust-fest")
        .await
        .unwrap();
    assert_eq!(listed.total, 101);
    assert!(listed.participations.iter().all(|p| p.is_winner));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore = "requires a Docker daemon"]
async fn judge_removed_while_scoring_is_forbidden() {
    let db = setup().await;
    let organizer = create_user(&db.pool, "org", Role::Organizer).await;
    let judge = create_user(&db.pool, "judge", Role::User).await;
    let alice = create_user(&db.pool, "alice", Role::User).await;
    let hackathon = create_hackathon(&db.pool, &organizer, "rust-fest", 1).await;
    let p = submit(&db.pool, &alice, "rust-fest", "alpha").await;
    ScoringService::assign_judge(&db.pool, &organizer, "rust-fest", "judge")
        .await
        .unwrap();

    // Hold an uncommitted removal of the assignment
    let mut removal = db.pool.begin().await.unwrap();
    let removed = JudgeRepository::remove(&mut *removal, &judge.id, &hackathon.id)
        .await
        .unwrap();
    assert_eq!(removed, 1);

    let pending = {
        let pool = db.pool.clone();
        let judge = judge.clone();
        let participation_id = p.id;
        tokio::spawn(async move {
            ScoringService::record_score(
                &pool,
                &ScoringConfig::default(),
                &judge,
                &participation_id,
                7.0,
            )
            .await
        })
    };
    tokio::time::sleep(std::time::Duration::from_millis(300)).await;
    removal.commit().await.unwrap();

    let err = pending.await.unwrap().unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    let scores = ScoringService::list_scores(&db.pool, &organizer, &p.id)
        .await
        .unwrap();
    assert!(scores.scores.is_empty());
}
