//! Book mutation actions
//!
//! All catalog writes go through these actions. The access check runs
//! before any input is validated or storage is touched.

use tracing::info;

use crate::common::{Actor, Identity, Operation, Resource};
use crate::domains::books::data::{BookInput, UpdateBookInput};
use crate::domains::books::errors::BookError;
use crate::domains::books::models::{Book, CreateBook, UpdateBook};
use crate::kernel::ServerDeps;

use super::{parse_book_id, require_non_blank};

/// Create a book (requires create on Book)
pub async fn create_book(
    input: BookInput,
    identity: &Identity,
    deps: &ServerDeps,
) -> Result<Book, BookError> {
    Actor::new(identity)
        .can(Operation::Create, Resource::Book)
        .check(deps)?;

    require_non_blank("title", &input.title)?;
    require_non_blank("author", &input.author)?;
    require_non_blank("year", &input.year)?;

    let book = deps
        .books
        .create(CreateBook {
            title: input.title,
            author: input.author,
            year: input.year,
        })
        .await?;

    info!(book_id = %book.id, created_by = ?identity.user_id, "Book created");

    Ok(book)
}

/// Update the provided fields of a book (requires update on Book)
pub async fn update_book(
    input: UpdateBookInput,
    identity: &Identity,
    deps: &ServerDeps,
) -> Result<Book, BookError> {
    Actor::new(identity)
        .can(Operation::Update, Resource::Book)
        .check(deps)?;

    let id = parse_book_id(&input.id)?;

    for (field, value) in [
        ("title", &input.title),
        ("author", &input.author),
        ("year", &input.year),
    ] {
        if let Some(value) = value {
            require_non_blank(field, value)?;
        }
    }

    let update = UpdateBook {
        title: input.title,
        author: input.author,
        year: input.year,
    };

    let book = deps
        .books
        .update(id, update)
        .await?
        .ok_or_else(|| BookError::NotFound(id.to_string()))?;

    info!(book_id = %book.id, updated_by = ?identity.user_id, "Book updated");

    Ok(book)
}

/// Delete a book (requires delete on Book)
pub async fn delete_book(
    book_id: String,
    identity: &Identity,
    deps: &ServerDeps,
) -> Result<bool, BookError> {
    Actor::new(identity)
        .can(Operation::Delete, Resource::Book)
        .check(deps)?;

    let id = parse_book_id(&book_id)?;

    if !deps.books.delete(id).await? {
        return Err(BookError::NotFound(id.to_string()));
    }

    info!(book_id = %id, deleted_by = ?identity.user_id, "Book deleted");

    Ok(true)
}
