use tracing::debug;

use super::{AccessTable, AuthError, Identity, Operation, Resource};

/// Entry point for authorization checks
///
/// Usage:
/// ```
/// use catalog_core::common::{AccessTable, Actor, Identity, Operation, Resource};
///
/// let table = AccessTable::standard();
/// let result = Actor::new(&Identity::anonymous())
///     .can(Operation::Read, Resource::Book)
///     .check(&table);
/// assert!(result.is_ok());
/// ```
pub struct Actor<'a> {
    identity: &'a Identity,
}

impl<'a> Actor<'a> {
    pub fn new(identity: &'a Identity) -> Self {
        Self { identity }
    }

    /// Specify the operation the actor wants to perform
    pub fn can(self, operation: Operation, resource: Resource) -> CapabilityBuilder<'a> {
        CapabilityBuilder {
            identity: self.identity,
            operation,
            resource,
        }
    }
}

/// Builder after specifying the operation
pub struct CapabilityBuilder<'a> {
    identity: &'a Identity,
    operation: Operation,
    resource: Resource,
}

impl CapabilityBuilder<'_> {
    /// Perform the authorization check against anything that carries the table
    pub fn check<D>(self, deps: &D) -> Result<(), AuthError>
    where
        D: HasAuthContext + ?Sized,
    {
        let table = deps.access_table();
        if table.permitted(self.identity.profile, self.resource, self.operation) {
            return Ok(());
        }

        debug!(
            profile = %self.identity.profile,
            user_id = ?self.identity.user_id,
            operation = %self.operation,
            resource = %self.resource,
            "Access denied"
        );

        Err(AuthError::PermissionDenied {
            operation: self.operation,
            resource: self.resource,
        })
    }
}

/// Anything that can answer access-table lookups
pub trait HasAuthContext: Send + Sync {
    fn access_table(&self) -> &AccessTable;
}

impl HasAuthContext for AccessTable {
    fn access_table(&self) -> &AccessTable {
        self
    }
}
