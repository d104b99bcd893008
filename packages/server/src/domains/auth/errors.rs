use thiserror::Error;

use crate::common::{AuthError, ErrorCode, StoreError};

/// Errors from signup, login, elevation and account queries
#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Username already taken. Please choose a different one.")]
    DuplicateUserName,

    #[error("Email already exists.")]
    DuplicateEmail,

    /// Same message whether the email or the password was wrong
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("This email is already registered as an Admin")]
    AlreadyAdmin,

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    PermissionDenied(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ErrorCode for AccountError {
    fn code(&self) -> &'static str {
        match self {
            AccountError::DuplicateUserName => "DUPLICATE_USER_NAME",
            AccountError::DuplicateEmail => "DUPLICATE_EMAIL",
            AccountError::InvalidCredentials => "INVALID_CREDENTIALS",
            AccountError::AlreadyAdmin => "ALREADY_ADMIN",
            AccountError::Validation(_) => "VALIDATION_ERROR",
            AccountError::PermissionDenied(e) => e.code(),
            AccountError::Store(e) => e.code(),
            AccountError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
