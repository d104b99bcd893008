use juniper::{GraphQLInputObject, GraphQLObject};

use super::models::Book;

/// Book GraphQL data type
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(name = "Book")]
pub struct BookData {
    pub id: juniper::ID,
    pub title: String,
    pub author: String,
    pub year: String,
    /// RFC 3339
    pub created_on: String,
    /// RFC 3339
    pub updated_on: String,
}

impl From<Book> for BookData {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.into(),
            title: book.title,
            author: book.author,
            year: book.year,
            created_on: book.created_on.to_rfc3339(),
            updated_on: book.updated_on.to_rfc3339(),
        }
    }
}

/// Wrapper matching the `listBooks { docs { ... } }` shape
#[derive(Debug, Clone, GraphQLObject)]
pub struct BookList {
    pub docs: Vec<BookData>,
}

impl From<Vec<Book>> for BookList {
    fn from(books: Vec<Book>) -> Self {
        Self {
            docs: books.into_iter().map(BookData::from).collect(),
        }
    }
}

#[derive(Debug, Clone, GraphQLInputObject)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub year: String,
}

/// Partial update; omitted fields keep their stored value
#[derive(Debug, Clone, GraphQLInputObject)]
#[graphql(name = "updateBookInput")]
pub struct UpdateBookInput {
    pub id: juniper::ID,
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<String>,
}
