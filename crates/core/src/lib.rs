//! Core domain types for Bookcase
//!
//! Everything else in the workspace builds on the [`Book`] entity defined here
//! and reports failures through [`AppError`].

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, ErrorSeverity};
pub use types::{Authors, Book, Isbn, Validator};
