//! Sign up action - creates an account with a role taken from the allow-list

use tracing::{info, warn};

use crate::common::{Role, StoreError};
use crate::domains::auth::data::SignUpInput;
use crate::domains::auth::errors::AccountError;
use crate::domains::auth::models::{normalize_email, CreateUser, User};
use crate::domains::auth::password::hash_password_blocking;
use crate::kernel::ServerDeps;

use super::require_non_blank;

/// Register a new user.
///
/// Checks, in order: blank fields, taken user name, taken email. The role is
/// ADMIN when the email is on the super-admin allow-list, USER otherwise.
pub async fn sign_up(input: SignUpInput, deps: &ServerDeps) -> Result<User, AccountError> {
    require_non_blank("userName", &input.user_name)?;
    require_non_blank("email", &input.email)?;
    require_non_blank("password", &input.password)?;

    let user_name = input.user_name.trim().to_string();
    let email = normalize_email(&input.email);

    if deps.users.find_by_user_name(&user_name).await?.is_some() {
        warn!(user_name = %user_name, "Signup attempted with existing username");
        return Err(AccountError::DuplicateUserName);
    }

    if deps.users.find_by_email(&email).await?.is_some() {
        warn!(email = %email, "Signup attempted with existing email");
        return Err(AccountError::DuplicateEmail);
    }

    let role = match deps.super_admins.find_by_email(&email).await? {
        Some(_) => Role::Admin,
        None => Role::User,
    };

    let password_hash = hash_password_blocking(input.password).await?;

    let user = deps
        .users
        .create(CreateUser {
            user_name,
            email,
            password_hash,
            role,
        })
        .await
        .map_err(|e| match e {
            // Lost a race with a concurrent signup for the same email
            StoreError::UniqueViolation(_) => AccountError::DuplicateEmail,
            other => AccountError::Store(other),
        })?;

    info!(user_id = %user.id, role = %user.role, "User registered");

    Ok(user)
}
