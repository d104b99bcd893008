//! Account read actions

use crate::common::{Actor, Identity, Operation, Resource};
use crate::domains::auth::errors::AccountError;
use crate::domains::auth::models::User;
use crate::kernel::ServerDeps;

/// List user accounts, oldest first (requires read on User)
pub async fn list_users(
    limit: Option<i32>,
    identity: &Identity,
    deps: &ServerDeps,
) -> Result<Vec<User>, AccountError> {
    Actor::new(identity)
        .can(Operation::Read, Resource::User)
        .check(deps)?;

    if matches!(limit, Some(n) if n < 0) {
        return Err(AccountError::Validation("limit must not be negative".to_string()));
    }

    Ok(deps.users.list(limit.map(i64::from)).await?)
}
