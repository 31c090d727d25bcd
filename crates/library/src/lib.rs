//! Bookcase Library
//!
//! The in-memory, insertion-ordered collection of tracked books for a session.
//! Nothing here is persisted: a library lives exactly as long as its session.

pub mod error;
pub mod manager;

pub use error::{LibraryError, LibraryResult};
pub use manager::{Library, LibraryStats};

use serde::{Deserialize, Serialize};
use std::fmt;

/// What happens when a book is added whose ISBN is already tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Append anyway; the collection may hold several entries per ISBN
    Allow,
    /// Refuse the new book
    #[default]
    Reject,
    /// Overwrite the existing entry, keeping its position
    Replace,
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicatePolicy::Allow => write!(f, "allow"),
            DuplicatePolicy::Reject => write!(f, "reject"),
            DuplicatePolicy::Replace => write!(f, "replace"),
        }
    }
}
