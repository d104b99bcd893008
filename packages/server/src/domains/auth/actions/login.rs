//! Login action - verifies credentials and issues a token

use tracing::{info, warn};

use crate::domains::auth::errors::AccountError;
use crate::domains::auth::models::{normalize_email, User};
use crate::domains::auth::password::verify_password_blocking;
use crate::kernel::ServerDeps;

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoggedIn {
    pub token: String,
    pub user: User,
}

/// Verify email and password and issue a signed token.
///
/// An unknown email and a wrong password fail identically.
pub async fn login(email: String, password: String, deps: &ServerDeps) -> Result<LoggedIn, AccountError> {
    let email = normalize_email(&email);

    let Some(user) = deps.users.find_by_email(&email).await? else {
        warn!(email = %email, "Login attempted for unknown email");
        return Err(AccountError::InvalidCredentials);
    };

    if !verify_password_blocking(password, user.password_hash.clone()).await? {
        warn!(user_id = %user.id, "Login attempted with wrong password");
        return Err(AccountError::InvalidCredentials);
    }

    let token = deps
        .jwt_service
        .create_token(user.id, user.email.clone(), user.role)?;

    info!(user_id = %user.id, role = %user.role, "User logged in");

    Ok(LoggedIn { token, user })
}
