//! Submission lifecycle against a real database

mod common;

use common::{create_hackathon, create_user, project, setup, submit};
use hackcontrol::{
    db::repositories::ParticipationRepository,
    error::AppError,
    handlers::{
        hackathons::request::UpdateHackathonRequest,
        participations::request::UpdateSubmissionRequest, users::request::UpdateProfileRequest,
    },
    models::{Role, TeamMember},
    services::{HackathonService, ScoringService, SubmissionService, UserService},
};
use tokio_test::assert_ok;

fn no_changes() -> UpdateSubmissionRequest {
    UpdateSubmissionRequest {
        title: None,
        description: None,
        project_url: None,
        team_members: None,
    }
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn duplicate_submit_is_a_conflict() {
    let db = setup().await;
    let organizer = create_user(&db.pool, "org", Role::Organizer).await;
    let alice = create_user(&db.pool, "alice", Role::User).await;
    create_hackathon(&db.pool, &organizer, "rust-fest", 2).await;

    submit(&db.pool, &alice, "rust-fest", "first").await;
    let err = SubmissionService::submit(&db.pool, &alice, "rust-fest", project("second"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
    let listed = SubmissionService::list_by_hackathon(&db.pool, "rust-fest").await.unwrap();
    assert_eq!(listed.total, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore = "requires a Docker daemon"]
async fn concurrent_duplicate_submits_admit_exactly_one() {
    let db = setup().await;
    let organizer = create_user(&db.pool, "org", Role::Organizer).await;
    let alice = create_user(&db.pool, "alice", Role::User).await;
    create_hackathon(&db.pool, &organizer, "rust-fest", 2).await;

    let (a, b) = tokio::join!(
        SubmissionService::submit(&db.pool, &alice, "rust-fest", project("a")),
        SubmissionService::submit(&db.pool, &alice, "rust-fest", project("b")),
    );

    let results = [a, b];
    let ok = results.iter().filter(|r| r.is_ok()).count();
    let conflicts = results
        .iter()
        .filter(|r| matches!(r, Err(AppError::Conflict(_))))
        .count();
    assert_eq!(ok, 1);
    assert_eq!(conflicts, 1);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn submit_to_unknown_hackathon_is_not_found() {
    let db = setup().await;
    let alice = create_user(&db.pool, "alice", Role::User).await;

    let err = SubmissionService::submit(&db.pool, &alice, "nowhere", project("p"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn finished_hackathon_locks_submissions() {
    let db = setup().await;
    let organizer = create_user(&db.pool, "org", Role::Organizer).await;
    let alice = create_user(&db.pool, "alice", Role::User).await;
    let bob = create_user(&db.pool, "bob", Role::User).await;
    create_hackathon(&db.pool, &organizer, "rust-fest", 2).await;

    let existing = submit(&db.pool, &alice, "rust-fest", "alpha").await;
    assert_ok!(ScoringService::finish(&db.pool, &organizer, "rust-fest").await);

    let err = SubmissionService::submit(&db.pool, &bob, "rust-fest", project("late"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Locked(_)));

    let mut changes = no_changes();
    changes.title = Some("renamed".to_string());
    let err = SubmissionService::update(&db.pool, &alice, &existing.id, changes)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Locked(_)));

    let err = SubmissionService::withdraw(&db.pool, &alice, &existing.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Locked(_)));
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn only_the_creator_edits_and_absent_fields_are_kept() {
    let db = setup().await;
    let organizer = create_user(&db.pool, "org", Role::Organizer).await;
    let alice = create_user(&db.pool, "alice", Role::User).await;
    let admin = create_user(&db.pool, "root", Role::Admin).await;
    create_hackathon(&db.pool, &organizer, "rust-fest", 2).await;
    let original = submit(&db.pool, &alice, "rust-fest", "alpha").await;

    let err = SubmissionService::update(&db.pool, &admin, &original.id, no_changes())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    let mut changes = no_changes();
    changes.title = Some("beta".to_string());
    changes.team_members = Some(vec![TeamMember {
        name: "Bob".to_string(),
        contact: Some("bob@example.com".to_string()),
    }]);
    let updated = SubmissionService::update(&db.pool, &alice, &original.id, changes)
        .await
        .unwrap();

    assert_eq!(updated.title, "beta");
    assert_eq!(updated.description, original.description);
    assert_eq!(updated.project_url, original.project_url);
    assert_eq!(updated.team_members.len(), 1);
    assert_eq!(updated.hackathon_url, "rust-fest");
    assert_eq!(updated.creator_name, alice.name);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn withdraw_removes_the_submission() {
    let db = setup().await;
    let organizer = create_user(&db.pool, "org", Role::Organizer).await;
    let alice = create_user(&db.pool, "alice", Role::User).await;
    create_hackathon(&db.pool, &organizer, "rust-fest", 2).await;
    let participation = submit(&db.pool, &alice, "rust-fest", "alpha").await;

    assert_ok!(SubmissionService::withdraw(&db.pool, &alice, &participation.id).await);

    let err = SubmissionService::get(&db.pool, &participation.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    // A withdrawn participant may submit again
    submit(&db.pool, &alice, "rust-fest", "alpha-2").await;
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn renames_propagate_to_submissions() {
    let db = setup().await;
    let organizer = create_user(&db.pool, "org", Role::Organizer).await;
    let alice = create_user(&db.pool, "alice", Role::User).await;
    create_hackathon(&db.pool, &organizer, "rust-fest", 2).await;
    let participation = submit(&db.pool, &alice, "rust-fest", "alpha").await;

    HackathonService::update(
        &db.pool,
        &organizer,
        "rust-fest",
        UpdateHackathonRequest {
            name: Some("Rust Fest 2025".to_string()),
            description: None,
            rules: None,
            criteria: None,
            min_judges_required: None,
        },
    )
    .await
    .unwrap();

    UserService::update_profile(
        &db.pool,
        &alice,
        UpdateProfileRequest {
            name: "Alice Liddell".to_string(),
        },
    )
    .await
    .unwrap();

    let stored = ParticipationRepository::find_by_id(&db.pool, &participation.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.hackathon_name, "Rust Fest 2025");
    assert_eq!(stored.creator_name, "Alice Liddell");
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn listings_are_in_submission_order() {
    let db = setup().await;
    let organizer = create_user(&db.pool, "org", Role::Organizer).await;
    let alice = create_user(&db.pool, "alice", Role::User).await;
    let bob = create_user(&db.pool, "bob", Role::User).await;
    create_hackathon(&db.pool, &organizer, "rust-fest", 2).await;
    create_hackathon(&db.pool, &organizer, "go-fest", 2).await;

    let first = submit(&db.pool, &bob, "rust-fest", "first").await;
    let second = submit(&db.pool, &alice, "rust-fest", "second").await;
    submit(&db.pool, &alice, "go-fest", "other").await;

    let listed = SubmissionService::list_by_hackathon(&db.pool, "rust-fest")
        .await
        .unwrap();
    let ids: Vec<_> = listed.participations.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    let mine = SubmissionService::list_mine(&db.pool, &alice).await.unwrap();
    assert_eq!(mine.total, 2);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn revoked_users_cannot_submit() {
    let db = setup().await;
    let organizer = create_user(&db.pool, "org", Role::Organizer).await;
    let mut alice = create_user(&db.pool, "alice", Role::User).await;
    create_hackathon(&db.pool, &organizer, "rust-fest", 2).await;
    alice.has_access = false;

    let err = SubmissionService::submit(&db.pool, &alice, "rust-fest", project("p"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));
}
