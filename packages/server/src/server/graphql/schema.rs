//! GraphQL schema definition.

use std::fmt::Display;

use juniper::{graphql_value, EmptySubscription, FieldError, FieldResult, RootNode};
use tracing::error;

use super::context::GraphQLContext;
use crate::common::ErrorCode;

// Domain actions
use crate::domains::auth::actions as auth_actions;
use crate::domains::books::actions as book_actions;

// Domain data types (GraphQL types)
use crate::domains::auth::data::{
    LoginResponse, SignUpInput, SignUpResponse, SuperAdminEmailData, SuperAdminResponse, UserData,
};
use crate::domains::books::data::{BookData, BookInput, BookList, UpdateBookInput};

/// Convert a domain error into a GraphQL error carrying `extensions.code`
fn to_field_error<E: Display + ErrorCode>(e: E) -> FieldError {
    let code = e.code();
    if matches!(code, "STORAGE_ERROR" | "INTERNAL_ERROR") {
        error!(code = code, error = %e, "Request failed");
    }
    FieldError::new(e.to_string(), graphql_value!({ "code": code }))
}

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    /// List books, oldest first
    async fn list_books(ctx: &GraphQLContext, limit: Option<i32>) -> FieldResult<BookList> {
        let books = book_actions::list_books(limit, &ctx.identity, &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(books.into())
    }

    /// Get a single book by id
    async fn get_book(ctx: &GraphQLContext, id: juniper::ID) -> FieldResult<Option<BookData>> {
        let book = book_actions::get_book(id.to_string(), &ctx.identity, &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(book.map(BookData::from))
    }

    /// List user accounts (admin only)
    async fn list_users(ctx: &GraphQLContext, limit: Option<i32>) -> FieldResult<Vec<UserData>> {
        let users = auth_actions::list_users(limit, &ctx.identity, &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(users.into_iter().map(UserData::from).collect())
    }

    /// Emails that receive the ADMIN role at signup
    async fn list_super_admin_emails(ctx: &GraphQLContext) -> FieldResult<Vec<SuperAdminEmailData>> {
        let entries = auth_actions::list_super_admin_emails(&ctx.identity, &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(entries.into_iter().map(SuperAdminEmailData::from).collect())
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    // =========================================================================
    // Accounts
    // =========================================================================

    async fn sign_up(ctx: &GraphQLContext, sign_up_data: SignUpInput) -> FieldResult<SignUpResponse> {
        let user = auth_actions::sign_up(sign_up_data, &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(SignUpResponse::registered(&user))
    }

    async fn login(ctx: &GraphQLContext, email: String, password: String) -> FieldResult<LoginResponse> {
        let logged_in = auth_actions::login(email, password, &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(LoginResponse::logged_in(logged_in.token, &logged_in.user))
    }

    /// Add an email to the super-admin allow-list (admin only)
    async fn add_super_admin_email(
        ctx: &GraphQLContext,
        email: String,
    ) -> FieldResult<SuperAdminResponse> {
        let entry = auth_actions::add_super_admin_email(email, &ctx.identity, &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(SuperAdminResponse {
            msg: "Admin added successfully".to_string(),
            email: entry.email,
        })
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    async fn create_book(ctx: &GraphQLContext, input: BookInput) -> FieldResult<BookData> {
        let book = book_actions::create_book(input, &ctx.identity, &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(book.into())
    }

    async fn update_book(ctx: &GraphQLContext, input: UpdateBookInput) -> FieldResult<BookData> {
        let book = book_actions::update_book(input, &ctx.identity, &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(book.into())
    }

    async fn delete_book(ctx: &GraphQLContext, id: juniper::ID) -> FieldResult<bool> {
        book_actions::delete_book(id.to_string(), &ctx.identity, &ctx.deps)
            .await
            .map_err(to_field_error)
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
