use juniper::{GraphQLInputObject, GraphQLObject};

use super::models::{SuperAdminEmail, User};

#[derive(Debug, Clone, GraphQLInputObject)]
#[graphql(name = "signUpInput")]
pub struct SignUpInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(name = "signUpResponse")]
pub struct SignUpResponse {
    pub id: String,
    pub msg: String,
    pub role: String,
}

impl SignUpResponse {
    pub fn registered(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            msg: "User Registered Successfully".to_string(),
            role: user.role.to_string(),
        }
    }
}

#[derive(Debug, Clone, GraphQLObject)]
pub struct LoginResponse {
    pub msg: String,
    pub token: String,
    /// Id of the logged in user
    pub user: String,
    pub role: String,
    pub user_name: String,
}

impl LoginResponse {
    pub fn logged_in(token: String, user: &User) -> Self {
        Self {
            msg: "User successfully logged in".to_string(),
            token,
            user: user.id.to_string(),
            role: user.role.to_string(),
            user_name: user.user_name.clone(),
        }
    }
}

#[derive(Debug, Clone, GraphQLObject)]
pub struct SuperAdminResponse {
    pub msg: String,
    pub email: String,
}

/// Public view of a user account. Password hashes never leave the server.
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(name = "User")]
pub struct UserData {
    pub id: juniper::ID,
    pub user_name: String,
    pub email: String,
    pub role: String,
    pub created_on: String,
}

impl From<User> for UserData {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            user_name: user.user_name,
            email: user.email,
            role: user.role.to_string(),
            created_on: user.created_on.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(name = "SuperAdminEmail")]
pub struct SuperAdminEmailData {
    pub id: juniper::ID,
    pub email: String,
    pub created_on: String,
}

impl From<SuperAdminEmail> for SuperAdminEmailData {
    fn from(entry: SuperAdminEmail) -> Self {
        Self {
            id: entry.id.into(),
            email: entry.email,
            created_on: entry.created_on.to_rfc3339(),
        }
    }
}
