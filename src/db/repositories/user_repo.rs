//! User repository

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::{error::AppResult, models::User};

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    pub async fn create<'e, E>(
        executor: E,
        name: &str,
        username: &str,
        email: &str,
        image: Option<&str>,
        role: &str,
    ) -> AppResult<User>
    where
        E: PgExecutor<'e>,
    {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, username, email, image, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(username)
        .bind(email)
        .bind(image)
        .bind(role)
        .fetch_one(executor)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id<'e, E>(executor: E, id: &Uuid) -> AppResult<Option<User>>
    where
        E: PgExecutor<'e>,
    {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(user)
    }

    /// Find user by username
    pub async fn find_by_username<'e, E>(executor: E, username: &str) -> AppResult<Option<User>>
    where
        E: PgExecutor<'e>,
    {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE username = $1"#)
            .bind(username)
            .fetch_optional(executor)
            .await?;

        Ok(user)
    }

    /// Find user by email (case-insensitive)
    pub async fn find_by_email<'e, E>(executor: E, email: &str) -> AppResult<Option<User>>
    where
        E: PgExecutor<'e>,
    {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE LOWER(email) = LOWER($1)"#)
            .bind(email)
            .fetch_optional(executor)
            .await?;

        Ok(user)
    }

    /// Refresh the avatar reported by the identity provider
    pub async fn update_image<'e, E>(executor: E, id: &Uuid, image: Option<&str>) -> AppResult<User>
    where
        E: PgExecutor<'e>,
    {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET image = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(image)
        .fetch_one(executor)
        .await?;

        Ok(user)
    }

    /// Update display name
    pub async fn update_name<'e, E>(executor: E, id: &Uuid, name: &str) -> AppResult<User>
    where
        E: PgExecutor<'e>,
    {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_one(executor)
        .await?;

        Ok(user)
    }

    /// Update user role
    pub async fn update_role<'e, E>(executor: E, id: &Uuid, role: &str) -> AppResult<User>
    where
        E: PgExecutor<'e>,
    {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET role = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(role)
        .fetch_one(executor)
        .await?;

        Ok(user)
    }

    /// Grant or revoke access
    pub async fn set_access<'e, E>(executor: E, id: &Uuid, has_access: bool) -> AppResult<User>
    where
        E: PgExecutor<'e>,
    {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET has_access = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(has_access)
        .fetch_one(executor)
        .await?;

        Ok(user)
    }

    /// List users with pagination
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        search: Option<&str>,
        role: Option<&str>,
    ) -> AppResult<(Vec<User>, i64)> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            WHERE
                ($1::text IS NULL OR username ILIKE $1 OR name ILIKE $1 OR email ILIKE $1)
                AND ($2::text IS NULL OR role = $2)
            ORDER BY created_at DESC, id
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(&search_pattern)
        .bind(role)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM users
            WHERE
                ($1::text IS NULL OR username ILIKE $1 OR name ILIKE $1 OR email ILIKE $1)
                AND ($2::text IS NULL OR role = $2)
            "#,
        )
        .bind(&search_pattern)
        .bind(role)
        .fetch_one(pool)
        .await?;

        Ok((users, total))
    }
}
