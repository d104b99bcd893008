use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::common::{Role, StoreResult, UserId};

/// User account
///
/// `user_name` is not unique in storage; `email` is.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: UserId,
    pub user_name: String,
    pub email: String,
    /// argon2 PHC string, never the raw password
    pub password_hash: String,
    pub role: Role,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

/// Input for creating a user
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub user_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Emails are compared trimmed and lowercased everywhere
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

// =============================================================================
// SQL Queries
// =============================================================================

impl User {
    /// Build a fresh record without touching storage
    pub fn from_input(input: CreateUser) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            user_name: input.user_name,
            email: input.email,
            password_hash: input.password_hash,
            role: input.role,
            created_on: now,
            updated_on: now,
        }
    }

    pub async fn find_by_email(email: &str, pool: &PgPool) -> StoreResult<Option<Self>> {
        let user = sqlx::query_as::<_, Self>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    pub async fn find_by_user_name(user_name: &str, pool: &PgPool) -> StoreResult<Option<Self>> {
        let user = sqlx::query_as::<_, Self>(
            "SELECT * FROM users WHERE user_name = $1 ORDER BY created_on LIMIT 1",
        )
        .bind(user_name)
        .fetch_optional(pool)
        .await?;
        Ok(user)
    }

    /// Insert a user. A duplicate email surfaces as `StoreError::UniqueViolation`.
    pub async fn create(input: CreateUser, pool: &PgPool) -> StoreResult<Self> {
        let user = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO users (id, user_name, email, password_hash, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(UserId::new())
        .bind(&input.user_name)
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(input.role)
        .fetch_one(pool)
        .await?;
        Ok(user)
    }

    /// Oldest first; `None` returns every user
    pub async fn list(limit: Option<i64>, pool: &PgPool) -> StoreResult<Vec<Self>> {
        let users = sqlx::query_as::<_, Self>(
            "SELECT * FROM users ORDER BY created_on ASC, id ASC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;
        Ok(users)
    }
}
