//! Auth domain - accounts, credentials and the super-admin allow-list
//!
//! Responsibilities:
//! - Signup with role assignment from the allow-list
//! - Login with argon2 password verification and JWT issuance
//! - Elevation: adding emails to the allow-list

pub mod actions;
pub mod data;
pub mod errors;
pub mod jwt;
pub mod models;
pub mod password;

pub use errors::AccountError;
pub use jwt::{Claims, JwtService};
