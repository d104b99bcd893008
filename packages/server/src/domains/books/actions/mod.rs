//! Book actions
//!
//! Actions are self-contained: they handle ID parsing, access checks and
//! input validation, and return models.

mod mutations;
mod queries;

pub use mutations::{create_book, delete_book, update_book};
pub use queries::{get_book, list_books};

use crate::common::BookId;

use super::errors::BookError;

/// Ids that do not parse cannot name a stored book
pub(crate) fn parse_book_id(raw: &str) -> Result<BookId, BookError> {
    BookId::parse(raw).map_err(|_| BookError::NotFound(raw.to_string()))
}

pub(crate) fn require_non_blank(field: &str, value: &str) -> Result<(), BookError> {
    if value.trim().is_empty() {
        return Err(BookError::Validation(format!("{} must not be blank", field)));
    }
    Ok(())
}
