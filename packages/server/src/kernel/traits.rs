// Trait definitions for dependency injection
//
// These are STORAGE traits only - no business logic. Duplicate checks,
// role assignment and access control live in domain actions.
//
// Naming convention: Base* for trait names (e.g., BaseUserStore, BaseBookStore)

use async_trait::async_trait;

use crate::common::{BookId, StoreResult};
use crate::domains::auth::models::{CreateUser, SuperAdminEmail, User};
use crate::domains::books::models::{Book, CreateBook, UpdateBook};

// =============================================================================
// Credential Store
// =============================================================================

#[async_trait]
pub trait BaseUserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    async fn find_by_user_name(&self, user_name: &str) -> StoreResult<Option<User>>;

    /// Must reject a second user with the same email (UniqueViolation)
    async fn create(&self, input: CreateUser) -> StoreResult<User>;

    async fn list(&self, limit: Option<i64>) -> StoreResult<Vec<User>>;
}

#[async_trait]
pub trait BaseSuperAdminStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<SuperAdminEmail>>;

    /// Must reject a duplicate email (UniqueViolation)
    async fn create(&self, email: &str) -> StoreResult<SuperAdminEmail>;

    /// Insert unless already present; true when a row was added
    async fn ensure(&self, email: &str) -> StoreResult<bool>;

    async fn list(&self) -> StoreResult<Vec<SuperAdminEmail>>;
}

// =============================================================================
// Catalog Storage
// =============================================================================

#[async_trait]
pub trait BaseBookStore: Send + Sync {
    /// Ordered by creation time, oldest first
    async fn list(&self, limit: Option<i64>) -> StoreResult<Vec<Book>>;

    async fn find_by_id(&self, id: BookId) -> StoreResult<Option<Book>>;

    async fn create(&self, input: CreateBook) -> StoreResult<Book>;

    /// `None` when the id does not resolve
    async fn update(&self, id: BookId, input: UpdateBook) -> StoreResult<Option<Book>>;

    /// `false` when the id does not resolve
    async fn delete(&self, id: BookId) -> StoreResult<bool>;
}
