//! Test fixtures for creating test data.
//!
//! These fixtures go through the domain actions so stored records look
//! exactly like the ones the API creates.

use anyhow::Result;
use catalog_core::common::{Identity, Role, UserId};
use catalog_core::domains::auth::actions::{login, sign_up};
use catalog_core::domains::auth::data::SignUpInput;
use catalog_core::domains::auth::models::User;
use catalog_core::domains::books::actions::create_book;
use catalog_core::domains::books::data::BookInput;
use catalog_core::domains::books::models::Book;
use catalog_core::kernel::ServerDeps;

pub const SIGN_UP: &str = r#"
    mutation SignUp($userName: String!, $email: String!, $password: String!) {
        signUp(signUpData: { userName: $userName, email: $email, password: $password }) {
            id
            msg
            role
        }
    }
"#;

pub const LOGIN: &str = r#"
    mutation Login($email: String!, $password: String!) {
        login(email: $email, password: $password) {
            msg
            token
            user
            role
            userName
        }
    }
"#;

pub const CREATE_BOOK: &str = r#"
    mutation CreateBook($title: String!, $author: String!, $year: String!) {
        createBook(input: { title: $title, author: $author, year: $year }) {
            id
            title
            author
            year
            createdOn
            updatedOn
        }
    }
"#;

pub const LIST_BOOKS: &str = r#"
    query ListBooks {
        listBooks {
            docs {
                id
                title
            }
        }
    }
"#;

/// Register a user through the signup action
pub async fn create_test_user(
    deps: &ServerDeps,
    user_name: &str,
    email: &str,
    password: &str,
) -> Result<User> {
    let user = sign_up(
        SignUpInput {
            user_name: user_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        },
        deps,
    )
    .await?;
    Ok(user)
}

/// Log in and return the issued token
pub async fn login_token(deps: &ServerDeps, email: &str, password: &str) -> Result<String> {
    let logged_in = login(email.to_string(), password.to_string(), deps).await?;
    Ok(logged_in.token)
}

/// Create a book as an administrator
pub async fn create_test_book(deps: &ServerDeps, title: &str) -> Result<Book> {
    let admin = Identity::authenticated(UserId::new(), "fixtures@example.com".into(), Role::Admin);
    let book = create_book(
        BookInput {
            title: title.to_string(),
            author: "Test Author".to_string(),
            year: "2020".to_string(),
        },
        &admin,
        deps,
    )
    .await?;
    Ok(book)
}
