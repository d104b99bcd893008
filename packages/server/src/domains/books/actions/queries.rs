//! Book query actions

use tracing::debug;

use crate::common::{Actor, Identity, Operation, Resource};
use crate::domains::books::errors::BookError;
use crate::domains::books::models::Book;
use crate::kernel::ServerDeps;

use super::parse_book_id;

/// List books oldest first. `None` returns the whole catalog.
pub async fn list_books(
    limit: Option<i32>,
    identity: &Identity,
    deps: &ServerDeps,
) -> Result<Vec<Book>, BookError> {
    Actor::new(identity)
        .can(Operation::Read, Resource::Book)
        .check(deps)?;

    if matches!(limit, Some(n) if n < 0) {
        return Err(BookError::Validation("limit must not be negative".to_string()));
    }

    let books = deps.books.list(limit.map(i64::from)).await?;
    debug!(count = books.len(), "Listed books");
    Ok(books)
}

/// Get a single book. Unknown or malformed ids yield `None`.
pub async fn get_book(
    book_id: String,
    identity: &Identity,
    deps: &ServerDeps,
) -> Result<Option<Book>, BookError> {
    Actor::new(identity)
        .can(Operation::Read, Resource::Book)
        .check(deps)?;

    let id = match parse_book_id(&book_id) {
        Ok(id) => id,
        Err(_) => return Ok(None),
    };

    Ok(deps.books.find_by_id(id).await?)
}
