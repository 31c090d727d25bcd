// FILE: crates/metadata/src/lib.rs

mod google_books;
mod traits;

pub use google_books::{
    GoogleBooksSettings, GoogleBooksSource, ImageLinks, IndustryIdentifier, Volume, VolumeInfo,
    VolumesResponse,
};
pub use traits::{LookupRequest, MetadataSource, SourceMetadata};

use bookcase_core::AppError;
use std::fmt;

/// Result type for metadata source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors from metadata sources
#[derive(Debug, Clone, PartialEq)]
pub enum SourceError {
    /// Network error
    NetworkError(String),
    /// Request exceeded the configured timeout (seconds)
    Timeout(u64),
    /// Non-success HTTP status
    HttpStatus(u16),
    /// Parse error
    ParseError(String),
    /// The service returned no matching volume
    NotFound,
    /// The matching volume lacks a field we need
    MissingField(&'static str),
    /// Invalid query
    InvalidQuery(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::NetworkError(e) => write!(f, "Network error: {}", e),
            SourceError::Timeout(secs) => write!(f, "Request timed out after {}s", secs),
            SourceError::HttpStatus(status) => write!(f, "HTTP {}", status),
            SourceError::ParseError(e) => write!(f, "Parse error: {}", e),
            SourceError::NotFound => write!(f, "Not found"),
            SourceError::MissingField(field) => write!(f, "Missing field: {}", field),
            SourceError::InvalidQuery(e) => write!(f, "Invalid query: {}", e),
        }
    }
}

impl std::error::Error for SourceError {}

impl SourceError {
    /// Converts into the application error for a lookup of `identifier` at `provider`
    pub fn into_app_error(self, provider: &str, identifier: &str) -> AppError {
        match self {
            SourceError::NetworkError(message) => AppError::NetworkError { message },
            SourceError::Timeout(seconds) => AppError::NetworkTimeout {
                operation: format!("{} lookup", provider),
                seconds,
            },
            SourceError::HttpStatus(status) => AppError::ContentSourceUnavailable {
                provider: provider.to_string(),
                reason: format!("HTTP {}", status),
            },
            SourceError::ParseError(details) => AppError::InvalidContentResponse {
                provider: provider.to_string(),
                details,
            },
            SourceError::MissingField(field) => AppError::InvalidContentResponse {
                provider: provider.to_string(),
                details: format!("missing {}", field),
            },
            SourceError::NotFound => AppError::ContentNotFound {
                identifier: identifier.to_string(),
                provider: provider.to_string(),
            },
            SourceError::InvalidQuery(reason) => AppError::InvalidArgument {
                argument: "query".to_string(),
                reason,
            },
        }
    }
}
