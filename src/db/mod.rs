//! Database module
//!
//! Connection pool setup, embedded migrations and repositories.

pub mod connection;
pub mod repositories;

use sqlx::{PgPool, migrate::Migrator};

pub use connection::*;

/// Schema migrations embedded at compile time
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}
