use std::sync::Arc;

use crate::common::Identity;
use crate::kernel::ServerDeps;

/// GraphQL request context
///
/// Shared dependencies plus the identity resolved for this request. The
/// identity is the only input to access checks in resolvers.
#[derive(Clone)]
pub struct GraphQLContext {
    pub deps: Arc<ServerDeps>,
    pub identity: Identity,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(deps: Arc<ServerDeps>, identity: Identity) -> Self {
        Self { deps, identity }
    }
}
