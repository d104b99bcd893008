//! Server dependencies for domain actions (using traits for testability)
//!
//! This module provides the central dependency container handed to every
//! action. Storage sits behind trait objects so tests can swap in memory.

use sqlx::PgPool;
use std::sync::Arc;

use crate::common::auth::{AccessTable, HasAuthContext};
use crate::domains::auth::JwtService;
use crate::kernel::{BaseBookStore, BaseSuperAdminStore, BaseUserStore, PostgresStore};

/// Shared, immutable dependencies
#[derive(Clone)]
pub struct ServerDeps {
    pub users: Arc<dyn BaseUserStore>,
    pub super_admins: Arc<dyn BaseSuperAdminStore>,
    pub books: Arc<dyn BaseBookStore>,
    pub jwt_service: Arc<JwtService>,
    pub access_table: Arc<AccessTable>,
}

impl ServerDeps {
    pub fn new(
        users: Arc<dyn BaseUserStore>,
        super_admins: Arc<dyn BaseSuperAdminStore>,
        books: Arc<dyn BaseBookStore>,
        jwt_service: Arc<JwtService>,
        access_table: Arc<AccessTable>,
    ) -> Self {
        Self {
            users,
            super_admins,
            books,
            jwt_service,
            access_table,
        }
    }

    /// Production wiring: every store backed by the same pool
    pub fn postgres(pool: PgPool, jwt_service: Arc<JwtService>) -> Self {
        let store = Arc::new(PostgresStore::new(pool));
        Self::new(
            store.clone(),
            store.clone(),
            store,
            jwt_service,
            Arc::new(AccessTable::standard()),
        )
    }
}

impl HasAuthContext for ServerDeps {
    fn access_table(&self) -> &AccessTable {
        &self.access_table
    }
}
