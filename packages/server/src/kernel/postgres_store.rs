//! PostgreSQL adapter for the store traits.
//!
//! Thin wrapper: every method delegates to the model's SQL.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::common::{BookId, StoreResult};
use crate::domains::auth::models::{CreateUser, SuperAdminEmail, User};
use crate::domains::books::models::{Book, CreateBook, UpdateBook};
use crate::kernel::{BaseBookStore, BaseSuperAdminStore, BaseUserStore};

#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseUserStore for PostgresStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        User::find_by_email(email, &self.pool).await
    }

    async fn find_by_user_name(&self, user_name: &str) -> StoreResult<Option<User>> {
        User::find_by_user_name(user_name, &self.pool).await
    }

    async fn create(&self, input: CreateUser) -> StoreResult<User> {
        User::create(input, &self.pool).await
    }

    async fn list(&self, limit: Option<i64>) -> StoreResult<Vec<User>> {
        User::list(limit, &self.pool).await
    }
}

#[async_trait]
impl BaseSuperAdminStore for PostgresStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<SuperAdminEmail>> {
        SuperAdminEmail::find_by_email(email, &self.pool).await
    }

    async fn create(&self, email: &str) -> StoreResult<SuperAdminEmail> {
        SuperAdminEmail::create(email, &self.pool).await
    }

    async fn ensure(&self, email: &str) -> StoreResult<bool> {
        SuperAdminEmail::ensure(email, &self.pool).await
    }

    async fn list(&self) -> StoreResult<Vec<SuperAdminEmail>> {
        SuperAdminEmail::list(&self.pool).await
    }
}

#[async_trait]
impl BaseBookStore for PostgresStore {
    async fn list(&self, limit: Option<i64>) -> StoreResult<Vec<Book>> {
        Book::list(limit, &self.pool).await
    }

    async fn find_by_id(&self, id: BookId) -> StoreResult<Option<Book>> {
        Book::find_by_id(id, &self.pool).await
    }

    async fn create(&self, input: CreateBook) -> StoreResult<Book> {
        Book::create(input, &self.pool).await
    }

    async fn update(&self, id: BookId, input: UpdateBook) -> StoreResult<Option<Book>> {
        Book::update(id, input, &self.pool).await
    }

    async fn delete(&self, id: BookId) -> StoreResult<bool> {
        Book::delete(id, &self.pool).await
    }
}
