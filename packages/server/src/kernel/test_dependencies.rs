// TestDependencies - in-memory implementations for testing
//
// Provides stores that can be injected into ServerDeps so domain actions and
// the GraphQL schema can be exercised without a database.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BaseBookStore, BaseSuperAdminStore, BaseUserStore, ServerDeps};
use crate::common::auth::AccessTable;
use crate::common::{BookId, StoreError, StoreResult};
use crate::domains::auth::models::{CreateUser, SuperAdminEmail, User};
use crate::domains::auth::JwtService;
use crate::domains::books::models::{Book, CreateBook, UpdateBook};

pub const TEST_JWT_SECRET: &str = "test_secret_key";
pub const TEST_JWT_ISSUER: &str = "test_issuer";

// =============================================================================
// In-memory store
// =============================================================================

/// Implements every store trait over vectors.
///
/// Enforces the same unique constraints as the PostgreSQL schema (user email,
/// allow-list email) so the backstop paths behave identically.
#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<Vec<User>>,
    super_admins: Mutex<Vec<SuperAdminEmail>>,
    books: Mutex<Vec<Book>>,
    failure: Mutex<Option<String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following call fail with a database error carrying `message`
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    /// Insert a user directly, bypassing signup (for fixtures)
    pub fn insert_user(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }

    pub fn book_count(&self) -> usize {
        self.books.lock().unwrap().len()
    }

    pub fn super_admin_count(&self) -> usize {
        self.super_admins.lock().unwrap().len()
    }

    fn check_failure(&self) -> StoreResult<()> {
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(StoreError::Database(sqlx::Error::Protocol(message.clone()))),
            None => Ok(()),
        }
    }
}

fn take<T: Clone>(items: &[T], limit: Option<i64>) -> Vec<T> {
    match limit {
        Some(n) => items.iter().take(n.max(0) as usize).cloned().collect(),
        None => items.to_vec(),
    }
}

#[async_trait]
impl BaseUserStore for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        self.check_failure()?;
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_user_name(&self, user_name: &str) -> StoreResult<Option<User>> {
        self.check_failure()?;
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.user_name == user_name).cloned())
    }

    async fn create(&self, input: CreateUser) -> StoreResult<User> {
        self.check_failure()?;
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == input.email) {
            return Err(StoreError::UniqueViolation("users_email_key".to_string()));
        }
        let user = User::from_input(input);
        users.push(user.clone());
        Ok(user)
    }

    async fn list(&self, limit: Option<i64>) -> StoreResult<Vec<User>> {
        self.check_failure()?;
        Ok(take(&self.users.lock().unwrap(), limit))
    }
}

#[async_trait]
impl BaseSuperAdminStore for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<SuperAdminEmail>> {
        self.check_failure()?;
        let entries = self.super_admins.lock().unwrap();
        Ok(entries.iter().find(|e| e.email == email).cloned())
    }

    async fn create(&self, email: &str) -> StoreResult<SuperAdminEmail> {
        self.check_failure()?;
        let mut entries = self.super_admins.lock().unwrap();
        if entries.iter().any(|e| e.email == email) {
            return Err(StoreError::UniqueViolation(
                "super_admin_emails_email_key".to_string(),
            ));
        }
        let entry = SuperAdminEmail::from_email(email.to_string());
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn ensure(&self, email: &str) -> StoreResult<bool> {
        self.check_failure()?;
        let mut entries = self.super_admins.lock().unwrap();
        if entries.iter().any(|e| e.email == email) {
            return Ok(false);
        }
        entries.push(SuperAdminEmail::from_email(email.to_string()));
        Ok(true)
    }

    async fn list(&self) -> StoreResult<Vec<SuperAdminEmail>> {
        self.check_failure()?;
        Ok(self.super_admins.lock().unwrap().clone())
    }
}

#[async_trait]
impl BaseBookStore for InMemoryStore {
    async fn list(&self, limit: Option<i64>) -> StoreResult<Vec<Book>> {
        self.check_failure()?;
        Ok(take(&self.books.lock().unwrap(), limit))
    }

    async fn find_by_id(&self, id: BookId) -> StoreResult<Option<Book>> {
        self.check_failure()?;
        let books = self.books.lock().unwrap();
        Ok(books.iter().find(|b| b.id == id).cloned())
    }

    async fn create(&self, input: CreateBook) -> StoreResult<Book> {
        self.check_failure()?;
        let book = Book::from_input(input);
        self.books.lock().unwrap().push(book.clone());
        Ok(book)
    }

    async fn update(&self, id: BookId, input: UpdateBook) -> StoreResult<Option<Book>> {
        self.check_failure()?;
        let mut books = self.books.lock().unwrap();
        Ok(books.iter_mut().find(|b| b.id == id).map(|book| {
            book.apply(input);
            book.clone()
        }))
    }

    async fn delete(&self, id: BookId) -> StoreResult<bool> {
        self.check_failure()?;
        let mut books = self.books.lock().unwrap();
        let before = books.len();
        books.retain(|b| b.id != id);
        Ok(books.len() < before)
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Builder for `ServerDeps` backed by a shared `InMemoryStore`
pub struct TestDependencies {
    pub store: Arc<InMemoryStore>,
    pub jwt_service: Arc<JwtService>,
    pub access_table: Arc<AccessTable>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            store: Arc::new(InMemoryStore::new()),
            jwt_service: Arc::new(JwtService::new(TEST_JWT_SECRET, TEST_JWT_ISSUER.to_string())),
            access_table: Arc::new(AccessTable::standard()),
        }
    }

    /// Pre-populate the super-admin allow-list
    pub fn with_super_admin(self, email: &str) -> Self {
        self.store
            .super_admins
            .lock()
            .unwrap()
            .push(SuperAdminEmail::from_email(email.to_string()));
        self
    }

    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.store.clone(),
            self.store.clone(),
            self.store.clone(),
            self.jwt_service.clone(),
            self.access_table.clone(),
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
