//! Domain types for Bookcase
//!
//! - `book`: the Book entity and its key/author value types
//! - `common`: shared traits

mod book;
mod common;

pub use book::{Authors, Book, Isbn};
pub use common::Validator;
