//! Typed id aliases for every stored record.

pub use super::id::Id;

/// Marker type for user accounts.
pub struct User;

/// Marker type for catalog books.
pub struct Book;

/// Marker type for super-admin allow-list entries.
pub struct SuperAdminEmail;

pub type UserId = Id<User>;

pub type BookId = Id<Book>;

pub type SuperAdminEmailId = Id<SuperAdminEmail>;
