//! Auth domain actions - business logic functions
//!
//! Actions are async functions called directly from GraphQL resolvers. They
//! take the caller's identity where access is checked and return models.

mod login;
mod queries;
mod sign_up;
mod super_admin;

pub use login::{login, LoggedIn};
pub use queries::list_users;
pub use sign_up::sign_up;
pub use super_admin::{add_super_admin_email, list_super_admin_emails, seed_super_admin_emails};

use super::errors::AccountError;

/// Reject empty or whitespace-only required fields
pub(crate) fn require_non_blank(field: &str, value: &str) -> Result<(), AccountError> {
    if value.trim().is_empty() {
        return Err(AccountError::Validation(format!("{} must not be blank", field)));
    }
    Ok(())
}
