// Common types and utilities shared across the application

pub mod auth;
pub mod entity_ids;
pub mod id;
pub mod store;

pub use auth::{
    AccessTable, Actor, AuthError, HasAuthContext, Identity, Operation, Profile, Resource, Role,
};
pub use entity_ids::*;
pub use id::Id;
pub use store::{ErrorCode, StoreError, StoreResult};
