// Book Catalog - API Core
//
// GraphQL API over a book catalog, guarded by role-based access control.
// Domains hold the business actions; kernel holds storage traits and the
// dependency container; server holds the HTTP/GraphQL surface.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
