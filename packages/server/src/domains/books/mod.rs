//! Books domain - the catalog
//!
//! Every action checks the caller's profile against the access table before
//! touching storage.

pub mod actions;
pub mod data;
pub mod errors;
pub mod models;

pub use errors::BookError;
pub use models::Book;
