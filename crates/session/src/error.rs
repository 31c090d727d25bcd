// crates/session/src/error.rs
//! Error types for the session

use crate::events::NotifyLevel;
use bookcase_core::{AppError, ErrorSeverity};
use bookcase_forms::FormError;
use bookcase_library::LibraryError;
use bookcase_metadata::SourceError;
use thiserror::Error;

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while driving a session
#[derive(Debug, Error)]
pub enum SessionError {
    /// Form error
    #[error("Form error: {0}")]
    Form(#[from] FormError),

    /// Collection error
    #[error("Library error: {0}")]
    Library(#[from] LibraryError),

    /// Lookup failed at the metadata service
    #[error("{provider} lookup for '{identifier}' failed: {source}")]
    Lookup {
        provider: String,
        identifier: String,
        source: SourceError,
    },
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Form(e) => AppError::InvalidArgument {
                argument: "form".to_string(),
                reason: e.to_string(),
            },
            SessionError::Library(e) => e.into(),
            SessionError::Lookup {
                provider,
                identifier,
                source,
            } => source.into_app_error(&provider, &identifier),
        }
    }
}

impl SessionError {
    /// Message fit to show the person using the session
    pub fn user_message(self) -> String {
        AppError::from(self).user_message()
    }

    /// Notice for the user: recoverable failures warn, the rest are errors
    pub fn notice(self) -> (NotifyLevel, String) {
        let err = AppError::from(self);
        let level = match err.severity() {
            ErrorSeverity::Recoverable => NotifyLevel::Warning,
            ErrorSeverity::Degraded => NotifyLevel::Error,
        };
        (level, err.user_message())
    }
}
