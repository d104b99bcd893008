//! Super-admin allow-list actions

use tracing::{info, warn};

use crate::common::{Actor, Identity, Operation, Resource, StoreError};
use crate::domains::auth::errors::AccountError;
use crate::domains::auth::models::{normalize_email, SuperAdminEmail};
use crate::kernel::ServerDeps;

use super::require_non_blank;

/// Add an email to the allow-list (requires update on User).
///
/// Only affects signups made afterwards; existing accounts keep their role.
pub async fn add_super_admin_email(
    email: String,
    identity: &Identity,
    deps: &ServerDeps,
) -> Result<SuperAdminEmail, AccountError> {
    Actor::new(identity)
        .can(Operation::Update, Resource::User)
        .check(deps)?;

    require_non_blank("email", &email)?;
    let email = normalize_email(&email);

    if deps.super_admins.find_by_email(&email).await?.is_some() {
        warn!(email = %email, "Email already on the super-admin allow-list");
        return Err(AccountError::AlreadyAdmin);
    }

    let entry = deps.super_admins.create(&email).await.map_err(|e| match e {
        StoreError::UniqueViolation(_) => AccountError::AlreadyAdmin,
        other => AccountError::Store(other),
    })?;

    info!(email = %entry.email, added_by = ?identity.user_id, "Super-admin email added");

    Ok(entry)
}

/// Read the allow-list (requires read on superAdmin)
pub async fn list_super_admin_emails(
    identity: &Identity,
    deps: &ServerDeps,
) -> Result<Vec<SuperAdminEmail>, AccountError> {
    Actor::new(identity)
        .can(Operation::Read, Resource::SuperAdmin)
        .check(deps)?;

    Ok(deps.super_admins.list().await?)
}

/// Insert configured emails at startup. Returns how many were new.
pub async fn seed_super_admin_emails(emails: &[String], deps: &ServerDeps) -> Result<usize, AccountError> {
    let mut seeded = 0;
    for email in emails {
        let email = normalize_email(email);
        if email.is_empty() {
            continue;
        }
        if deps.super_admins.ensure(&email).await? {
            seeded += 1;
        }
    }

    if seeded > 0 {
        info!(count = seeded, "Seeded super-admin allow-list");
    }

    Ok(seeded)
}
