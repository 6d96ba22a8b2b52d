//! Shared fixtures for integration tests
//!
//! Each test gets its own PostgreSQL container with migrations applied.

#![allow(dead_code)]

use hackcontrol::{
    db::{self, repositories::UserRepository},
    handlers::{
        hackathons::{request::CreateHackathonRequest, response::HackathonResponse},
        participations::{request::SubmitProjectRequest, response::ParticipationResponse},
    },
    middleware::auth::AuthenticatedUser,
    models::Role,
    services::{HackathonService, SubmissionService},
};
use sqlx::{PgPool, postgres::PgPoolOptions};
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;

pub struct TestDb {
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

/// Start a PostgreSQL container and run migrations
pub async fn setup() -> TestDb {
    let container = Postgres::default()
        .start()
        .await
        .expect("Failed to start PostgreSQL container");
    let host = container.get_host().await.unwrap();
    let port = container.get_host_port_ipv4(5432).await.unwrap();
    let url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&url)
        .await
        .expect("Failed to connect to test database");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    TestDb {
        pool,
        _container: container,
    }
}

/// Insert a user with the given role
pub async fn create_user(pool: &PgPool, username: &str, role: Role) -> AuthenticatedUser {
    let user = UserRepository::create(
        pool,
        &format!("{} Name", username),
        username,
        &format!("{}@example.com", username),
        None,
        role.as_str(),
    )
    .await
    .expect("Failed to create user");

    AuthenticatedUser::from(&user)
}

/// Create an open hackathon owned by `owner`
pub async fn create_hackathon(
    pool: &PgPool,
    owner: &AuthenticatedUser,
    url: &str,
    min_judges_required: i32,
) -> HackathonResponse {
    HackathonService::create(
        pool,
        owner,
        2,
        CreateHackathonRequest {
            name: format!("Hackathon {}", url),
            url: url.to_string(),
            description: None,
            rules: None,
            criteria: None,
            min_judges_required: Some(min_judges_required),
        },
    )
    .await
    .expect("Failed to create hackathon")
}

pub fn project(title: &str) -> SubmitProjectRequest {
    SubmitProjectRequest {
        title: title.to_string(),
        description: Some(format!("{} description", title)),
        project_url: format!("https://github.com/example/{}", title),
        team_members: None,
    }
}

/// Submit a project as `user`
pub async fn submit(
    pool: &PgPool,
    user: &AuthenticatedUser,
    hackathon_url: &str,
    title: &str,
) -> ParticipationResponse {
    SubmissionService::submit(pool, user, hackathon_url, project(title))
        .await
        .expect("Failed to submit project")
}
