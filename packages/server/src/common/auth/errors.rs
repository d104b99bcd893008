use thiserror::Error;

use super::{Operation, Resource};

/// Authorization errors raised by the access table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Permission denied: cannot {operation} {resource}")]
    PermissionDenied {
        operation: Operation,
        resource: Resource,
    },
}

impl crate::common::ErrorCode for AuthError {
    fn code(&self) -> &'static str {
        match self {
            AuthError::PermissionDenied { .. } => "PERMISSION_DENIED",
        }
    }
}
