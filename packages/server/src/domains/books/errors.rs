use thiserror::Error;

use crate::common::{AuthError, ErrorCode, StoreError};

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Book not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    PermissionDenied(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ErrorCode for BookError {
    fn code(&self) -> &'static str {
        match self {
            BookError::NotFound(_) => "NOT_FOUND",
            BookError::Validation(_) => "VALIDATION_ERROR",
            BookError::PermissionDenied(e) => e.code(),
            BookError::Store(e) => e.code(),
        }
    }
}
