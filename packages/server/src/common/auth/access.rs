//! Static access table: profile -> resource -> permitted operations.
//!
//! The table is built once at startup and never mutated. Lookups for a
//! (profile, resource) pair with no grant deny.

use std::collections::HashMap;
use std::fmt;

use super::Profile;

/// Resource types subject to access rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    User,
    Book,
    SuperAdmin,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Resource::User => "User",
            Resource::Book => "Book",
            Resource::SuperAdmin => "superAdmin",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Create,
        Operation::Read,
        Operation::Update,
        Operation::Delete,
    ];

    fn bit(self) -> u8 {
        match self {
            Operation::Create => 0b0001,
            Operation::Read => 0b0010,
            Operation::Update => 0b0100,
            Operation::Delete => 0b1000,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Create => "create",
            Operation::Read => "read",
            Operation::Update => "update",
            Operation::Delete => "delete",
        })
    }
}

/// Subset of {create, read, update, delete}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OperationSet(u8);

impl OperationSet {
    pub const NONE: OperationSet = OperationSet(0);
    pub const READ_ONLY: OperationSet = OperationSet(0b0010);
    pub const CRUD: OperationSet = OperationSet(0b1111);

    pub fn of(operations: &[Operation]) -> Self {
        Self(operations.iter().fold(0, |bits, op| bits | op.bit()))
    }

    pub fn contains(&self, operation: Operation) -> bool {
        self.0 & operation.bit() != 0
    }
}

/// One row of the table
#[derive(Debug, Clone, Copy)]
pub struct Grant {
    pub resource: Resource,
    pub operations: OperationSet,
}

impl Grant {
    pub const fn new(resource: Resource, operations: OperationSet) -> Self {
        Self {
            resource,
            operations,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AccessTable {
    grants: HashMap<Profile, Vec<Grant>>,
}

impl AccessTable {
    /// Build a table from explicit per-profile grants.
    pub fn new(grants: impl IntoIterator<Item = (Profile, Vec<Grant>)>) -> Self {
        Self {
            grants: grants.into_iter().collect(),
        }
    }

    /// The catalog's rules.
    ///
    /// ADMIN: full CRUD on users and books, read on the allow-list.
    /// USER: read on books and the allow-list.
    /// ANONYMOUS: read on books.
    pub fn standard() -> Self {
        Self::new([
            (
                Profile::Admin,
                vec![
                    Grant::new(Resource::User, OperationSet::CRUD),
                    Grant::new(Resource::Book, OperationSet::CRUD),
                    Grant::new(Resource::SuperAdmin, OperationSet::READ_ONLY),
                ],
            ),
            (
                Profile::User,
                vec![
                    Grant::new(Resource::Book, OperationSet::READ_ONLY),
                    Grant::new(Resource::SuperAdmin, OperationSet::READ_ONLY),
                ],
            ),
            (
                Profile::Anonymous,
                vec![Grant::new(Resource::Book, OperationSet::READ_ONLY)],
            ),
        ])
    }

    pub fn permitted(&self, profile: Profile, resource: Resource, operation: Operation) -> bool {
        self.grants
            .get(&profile)
            .and_then(|grants| grants.iter().find(|g| g.resource == resource))
            .map(|grant| grant.operations.contains(operation))
            .unwrap_or(false)
    }
}

impl Default for AccessTable {
    fn default() -> Self {
        Self::standard()
    }
}
