// FILE: crates/library/src/error.rs

use bookcase_core::{AppError, Isbn};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error("Duplicate ISBN: {0}")]
    DuplicateIsbn(Isbn),

    #[error("Book not found: {0}")]
    BookNotFound(Isbn),

    #[error("Invalid book: {0}")]
    InvalidBook(String),
}

impl From<LibraryError> for AppError {
    fn from(err: LibraryError) -> Self {
        match err {
            LibraryError::DuplicateIsbn(isbn) => AppError::DuplicateBook {
                isbn: isbn.to_string(),
            },
            LibraryError::BookNotFound(isbn) => AppError::BookNotFound {
                isbn: isbn.to_string(),
            },
            LibraryError::InvalidBook(reason) => AppError::InvalidBook { reason },
        }
    }
}

// Both type aliases for convenience
pub type Result<T> = std::result::Result<T, LibraryError>;
pub type LibraryResult<T> = std::result::Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use super::*;
    use bookcase_core::ErrorSeverity;

    #[test]
    fn test_converts_to_app_error() {
        let err: AppError = LibraryError::DuplicateIsbn(Isbn::new("42")).into();
        assert!(matches!(err, AppError::DuplicateBook { ref isbn } if isbn == "42"));
        assert_eq!(err.severity(), ErrorSeverity::Degraded);
    }
}
