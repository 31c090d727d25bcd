//! Book domain model

use crate::types::Validator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ISBN (or other industry identifier) used as the collection key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Isbn(String);

impl Isbn {
    /// Creates an Isbn from any string-like value, trimming whitespace
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self(value.trim().to_string())
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier is blank
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Isbn {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Isbn {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Author credit: either a single name or the list reported by a metadata service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Authors {
    One(String),
    Many(Vec<String>),
}

impl Authors {
    /// Single author
    pub fn one(name: impl Into<String>) -> Self {
        Self::One(name.into())
    }

    /// Several authors, in credit order
    pub fn many<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Many(names.into_iter().map(Into::into).collect())
    }

    /// Iterates over the individual names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        let names: &[String] = match self {
            Self::One(name) => std::slice::from_ref(name),
            Self::Many(names) => names,
        };
        names.iter().map(String::as_str)
    }

    /// Returns true if no non-blank name is present
    pub fn is_empty(&self) -> bool {
        self.names().all(|name| name.trim().is_empty())
    }
}

impl Default for Authors {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl fmt::Display for Authors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().collect::<Vec<_>>().join(", "))
    }
}

/// A tracked book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: Authors,
    pub isbn: Isbn,
    pub pages: u32,
    pub image_link: String,
    pub read: bool,
}

impl Book {
    /// Creates an unread book without a cover image
    pub fn new(
        title: impl Into<String>,
        author: Authors,
        isbn: impl Into<Isbn>,
        pages: u32,
    ) -> Self {
        Self {
            title: title.into(),
            author,
            isbn: isbn.into(),
            pages,
            image_link: String::new(),
            read: false,
        }
    }

    /// Sets the cover image URI
    pub fn with_image_link(mut self, image_link: impl Into<String>) -> Self {
        self.image_link = image_link.into();
        self
    }

    /// Sets the read flag
    pub fn with_read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    /// Flips the read flag and returns the new value
    pub fn toggle_read(&mut self) -> bool {
        self.read = !self.read;
        self.read
    }
}

impl Validator for Book {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("Title cannot be empty".to_string());
        }

        if self.isbn.is_empty() {
            errors.push("ISBN cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Book {
        Book::new(
            "Mistborn",
            Authors::one("Brandon Sanderson"),
            "9780765311788",
            541,
        )
    }

    #[test]
    fn test_book_new() {
        let book = sample();
        assert_eq!(book.title, "Mistborn");
        assert_eq!(book.pages, 541);
        assert!(!book.read);
        assert!(book.image_link.is_empty());
    }

    #[test]
    fn test_isbn_trims_whitespace() {
        let isbn = Isbn::new("  123  ");
        assert_eq!(isbn.as_str(), "123");
        assert_eq!(isbn, Isbn::from("123"));
    }

    #[test]
    fn test_toggle_read() {
        let mut book = sample();
        assert!(book.toggle_read());
        assert!(book.read);
        assert!(!book.toggle_read());
    }

    #[test]
    fn test_builders() {
        let book = sample()
            .with_read(true)
            .with_image_link("http://books.google.com/thumb.jpg");
        assert!(book.read);
        assert_eq!(book.image_link, "http://books.google.com/thumb.jpg");
    }

    #[test]
    fn test_authors_display() {
        assert_eq!(Authors::one("Brandon").to_string(), "Brandon");
        assert_eq!(
            Authors::many(["Robert Jordan", "Brandon Sanderson"]).to_string(),
            "Robert Jordan, Brandon Sanderson"
        );
        assert!(Authors::default().is_empty());
        assert!(Authors::one("  ").is_empty());
    }

    #[test]
    fn test_authors_deserialize_untagged() {
        let one: Authors = serde_json::from_str("\"Brandon\"").unwrap();
        assert_eq!(one, Authors::one("Brandon"));

        let many: Authors = serde_json::from_str("[\"A\", \"B\"]").unwrap();
        assert_eq!(many, Authors::many(["A", "B"]));
    }

    #[test]
    fn test_book_validation_success() {
        assert!(sample().is_valid());
    }

    #[test]
    fn test_book_validation_empty_fields() {
        let mut book = sample();
        book.title = "   ".to_string();
        book.isbn = Isbn::new("");
        let errors = book.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
