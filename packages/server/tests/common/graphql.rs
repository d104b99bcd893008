//! GraphQL client for integration testing.
//!
//! Executes GraphQL queries directly against the schema without HTTP overhead.

use catalog_core::common::{Identity, Profile, Role, UserId};
use catalog_core::kernel::ServerDeps;
use catalog_core::server::graphql::{create_schema, GraphQLContext, Schema};
use juniper::Variables;
use serde_json::Value;
use std::sync::Arc;

/// GraphQL client for executing queries and mutations in tests.
pub struct GraphQLClient {
    schema: Schema,
    context: GraphQLContext,
}

/// Result of a GraphQL execution.
#[derive(Debug)]
pub struct GraphQLResult {
    pub data: Option<Value>,
    pub errors: Vec<String>,
    /// `extensions.code` of each error, in order
    pub codes: Vec<Option<String>>,
}

impl GraphQLResult {
    /// Returns true if the execution had no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Unwraps the data, panicking if there were errors.
    pub fn unwrap(self) -> Value {
        if !self.errors.is_empty() {
            panic!("GraphQL errors: {:?}", self.errors);
        }
        self.data.expect("No data returned")
    }

    /// Gets a value at the given JSON path.
    ///
    /// # Example
    /// ```ignore
    /// let title = result.get("createBook.title").as_str();
    /// ```
    pub fn get(&self, path: &str) -> Value {
        let data = self.data.as_ref().expect("No data returned");
        let mut current = data;
        for key in path.split('.') {
            current = &current[key];
        }
        current.clone()
    }

    /// Code of the first error, if any.
    pub fn code(&self) -> Option<&str> {
        self.codes.first().and_then(|c| c.as_deref())
    }
}

impl GraphQLClient {
    /// Creates a client for an anonymous caller.
    pub fn new(deps: Arc<ServerDeps>) -> Self {
        Self::with_identity(deps, Identity::anonymous())
    }

    /// Creates a client acting as the given identity.
    pub fn with_identity(deps: Arc<ServerDeps>, identity: Identity) -> Self {
        Self {
            schema: create_schema(),
            context: GraphQLContext::new(deps, identity),
        }
    }

    /// Creates a client for an authenticated user with the given role.
    pub fn with_role(deps: Arc<ServerDeps>, role: Role) -> Self {
        let email = format!("{}@example.com", role.as_str().to_lowercase());
        Self::with_identity(deps, Identity::authenticated(UserId::new(), email, role))
    }

    /// Creates a client for a caller without a token under a non-default fallback profile.
    pub fn with_fallback(deps: Arc<ServerDeps>, profile: Profile) -> Self {
        Self::with_identity(deps, Identity::fallback(profile))
    }

    /// Execute a GraphQL query/mutation.
    pub async fn execute(&self, query: &str) -> GraphQLResult {
        self.execute_with_vars(query, Variables::new()).await
    }

    /// Execute a GraphQL query/mutation with variables.
    pub async fn execute_with_vars(&self, query: &str, variables: Variables) -> GraphQLResult {
        let (result, errors) =
            juniper::execute(query, None, &self.schema, &variables, &self.context)
                .await
                .expect("GraphQL execution failed");

        let data = Some(serde_json::to_value(&result).expect("Failed to serialize GraphQL result"));

        let error_messages: Vec<String> = errors
            .iter()
            .map(|e| e.error().message().to_string())
            .collect();

        let codes = errors
            .iter()
            .map(|e| {
                let value = serde_json::to_value(e).expect("Failed to serialize GraphQL error");
                value["extensions"]["code"].as_str().map(str::to_string)
            })
            .collect();

        GraphQLResult {
            data,
            errors: error_messages,
            codes,
        }
    }

    /// Execute a query and expect success, returning the data.
    pub async fn query(&self, query: &str) -> Value {
        self.execute(query).await.unwrap()
    }

    /// Execute a query with variables and expect success.
    pub async fn query_with_vars(&self, query: &str, variables: Variables) -> Value {
        self.execute_with_vars(query, variables).await.unwrap()
    }
}
