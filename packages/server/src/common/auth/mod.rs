//! Authorization for the book catalog
//!
//! Every guarded operation goes through one fluent check:
//!
//! ```rust
//! use catalog_core::common::auth::{AccessTable, Actor, Identity, Operation, Resource};
//!
//! let table = AccessTable::standard();
//! let denied = Actor::new(&Identity::anonymous())
//!     .can(Operation::Create, Resource::Book)
//!     .check(&table);
//! assert!(denied.is_err());
//! ```
//!
//! Actions run this check before touching storage.

mod access;
mod builder;
mod errors;
mod identity;
mod profile;

pub use access::{AccessTable, Grant, Operation, OperationSet, Resource};
pub use builder::{Actor, CapabilityBuilder, HasAuthContext};
pub use errors::AuthError;
pub use identity::Identity;
pub use profile::{Profile, Role, UnknownRole};
