use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::common::{StoreResult, SuperAdminEmailId};

/// Allow-list entry: signups with this email receive the ADMIN role
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SuperAdminEmail {
    pub id: SuperAdminEmailId,
    pub email: String,
    pub created_on: DateTime<Utc>,
}

impl SuperAdminEmail {
    pub fn from_email(email: String) -> Self {
        Self {
            id: SuperAdminEmailId::new(),
            email,
            created_on: Utc::now(),
        }
    }

    pub async fn find_by_email(email: &str, pool: &PgPool) -> StoreResult<Option<Self>> {
        let entry = sqlx::query_as::<_, Self>("SELECT * FROM super_admin_emails WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(entry)
    }

    /// Insert an entry. A duplicate email surfaces as `StoreError::UniqueViolation`.
    pub async fn create(email: &str, pool: &PgPool) -> StoreResult<Self> {
        let entry = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO super_admin_emails (id, email)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(SuperAdminEmailId::new())
        .bind(email)
        .fetch_one(pool)
        .await?;
        Ok(entry)
    }

    /// Insert unless present; used to seed the list from configuration.
    /// Returns whether a row was inserted.
    pub async fn ensure(email: &str, pool: &PgPool) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO super_admin_emails (id, email)
            VALUES ($1, $2)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(SuperAdminEmailId::new())
        .bind(email)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    pub async fn list(pool: &PgPool) -> StoreResult<Vec<Self>> {
        let entries = sqlx::query_as::<_, Self>(
            "SELECT * FROM super_admin_emails ORDER BY created_on ASC, id ASC",
        )
        .fetch_all(pool)
        .await?;
        Ok(entries)
    }
}
