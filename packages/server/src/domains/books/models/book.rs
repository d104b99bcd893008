use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::common::{BookId, StoreResult};

/// Catalog book
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Free-form, as entered (e.g. "2020")
    pub year: String,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

/// Input for creating a book
#[derive(Debug, Clone)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub year: String,
}

/// Partial update; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<String>,
}

impl Book {
    /// Build a fresh record without touching storage
    pub fn from_input(input: CreateBook) -> Self {
        let now = Utc::now();
        Self {
            id: BookId::new(),
            title: input.title,
            author: input.author,
            year: input.year,
            created_on: now,
            updated_on: now,
        }
    }

    /// Apply a partial update in memory, bumping `updated_on`
    pub fn apply(&mut self, update: UpdateBook) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(author) = update.author {
            self.author = author;
        }
        if let Some(year) = update.year {
            self.year = year;
        }
        self.updated_on = Utc::now();
    }

    pub async fn find_by_id(id: BookId, pool: &PgPool) -> StoreResult<Option<Self>> {
        let book = sqlx::query_as::<_, Self>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(book)
    }

    /// Oldest first; `None` returns the whole catalog
    pub async fn list(limit: Option<i64>, pool: &PgPool) -> StoreResult<Vec<Self>> {
        let books = sqlx::query_as::<_, Self>(
            "SELECT * FROM books ORDER BY created_on ASC, id ASC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;
        Ok(books)
    }

    pub async fn create(input: CreateBook, pool: &PgPool) -> StoreResult<Self> {
        let book = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO books (id, title, author, year)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(BookId::new())
        .bind(&input.title)
        .bind(&input.author)
        .bind(&input.year)
        .fetch_one(pool)
        .await?;
        Ok(book)
    }

    /// Returns `None` when no book has this id
    pub async fn update(id: BookId, input: UpdateBook, pool: &PgPool) -> StoreResult<Option<Self>> {
        let book = sqlx::query_as::<_, Self>(
            r#"
            UPDATE books SET
                title = COALESCE($2, title),
                author = COALESCE($3, author),
                year = COALESCE($4, year),
                updated_on = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.author)
        .bind(&input.year)
        .fetch_optional(pool)
        .await?;
        Ok(book)
    }

    /// Returns `false` when no book has this id
    pub async fn delete(id: BookId, pool: &PgPool) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
