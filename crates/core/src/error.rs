//! Error types for Bookcase
//!
//! Errors are classified into two severity tiers:
//! - **Recoverable**: Trying again may succeed (network timeouts, etc.)
//! - **Degraded**: The operation is abandoned but the session continues
//!
//! Nothing in a session is fatal to the session itself; severity is used to
//! decide how loudly an error is reported.

use std::fmt;
use thiserror::Error;

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Trying again may succeed
    Recoverable,
    /// Operation abandoned but the session can continue
    Degraded,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recoverable => write!(f, "Recoverable"),
            Self::Degraded => write!(f, "Degraded"),
        }
    }
}

/// Main error type for Bookcase
#[derive(Error, Debug)]
pub enum AppError {
    // ===== Network Errors =====
    /// Network request failed
    #[error("Network error: {message}")]
    NetworkError { message: String },

    /// Network timeout
    #[error("Network timeout after {seconds}s: {operation}")]
    NetworkTimeout { operation: String, seconds: u64 },

    // ===== Metadata Source Errors =====
    /// Metadata service unavailable
    #[error("Content source '{provider}' unavailable: {reason}")]
    ContentSourceUnavailable { provider: String, reason: String },

    /// Invalid response from the metadata service
    #[error("Invalid response from {provider}: {details}")]
    InvalidContentResponse { provider: String, details: String },

    /// No match at the metadata service
    #[error("Content not found: {identifier} at {provider}")]
    ContentNotFound {
        identifier: String,
        provider: String,
    },

    // ===== Collection Errors =====
    /// A book with the same ISBN is already tracked
    #[error("Duplicate book: ISBN {isbn} is already in the library")]
    DuplicateBook { isbn: String },

    /// Book not in the collection
    #[error("Book not found: ISBN {isbn}")]
    BookNotFound { isbn: String },

    /// Book failed its own validation
    #[error("Invalid book: {reason}")]
    InvalidBook { reason: String },

    // ===== Generic Errors =====
    /// Invalid argument provided
    #[error("Invalid argument: {argument} - {reason}")]
    InvalidArgument { argument: String, reason: String },
}

impl AppError {
    /// Returns the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NetworkError { .. } | Self::NetworkTimeout { .. } => ErrorSeverity::Recoverable,
            _ => ErrorSeverity::Degraded,
        }
    }

    /// Returns a user-friendly error message suitable for display
    pub fn user_message(&self) -> String {
        match self {
            Self::NetworkError { .. } | Self::NetworkTimeout { .. } => {
                "Cannot reach the book service. Please check your connection.".to_string()
            }

            Self::ContentSourceUnavailable { provider, .. } => {
                format!("{} is currently unavailable. Please try again later.", provider)
            }
            Self::InvalidContentResponse { .. } => {
                "Received incomplete book data from the server.".to_string()
            }
            Self::ContentNotFound { identifier, .. } => {
                format!("No book matching '{}' was found.", identifier)
            }

            Self::DuplicateBook { isbn } => {
                format!("A book with ISBN {} is already in your library.", isbn)
            }
            Self::BookNotFound { isbn } => format!("No book with ISBN {} in your library.", isbn),
            Self::InvalidBook { reason } => format!("The book could not be added: {}.", reason),

            Self::InvalidArgument { .. } => "Invalid input provided.".to_string(),
        }
    }
}
