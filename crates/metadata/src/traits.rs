// FILE: src/traits.rs
// ============================================================================

use crate::SourceResult;
use bookcase_core::Book;
use std::future::Future;

/// A remote book-metadata service
pub trait MetadataSource: Send + Sync {
    /// Look up the best match for a title/author pair and map it into a Book
    fn lookup(&self, request: &LookupRequest) -> impl Future<Output = SourceResult<Book>> + Send;

    /// Get metadata about the source
    fn metadata(&self) -> SourceMetadata;
}

/// What the user asked for, plus the values that override the service's answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub title: String,
    pub author: String,
    pub read: bool,
    /// Page count override; zero is treated as absent
    pub pages: Option<u32>,
}

impl LookupRequest {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            read: false,
            pages: None,
        }
    }

    pub fn with_read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    pub fn with_pages(mut self, pages: u32) -> Self {
        self.pages = Some(pages);
        self
    }

    /// The page override, if one was given and is nonzero
    pub fn page_override(&self) -> Option<u32> {
        self.pages.filter(|&pages| pages > 0)
    }
}

/// Source metadata
#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub name: String,
    pub description: String,
    pub base_url: String,
    pub requires_auth: bool,
}

#[cfg(test)]
mod trait_tests {
    use super::*;

    #[test]
    fn test_lookup_request_builder() {
        let request = LookupRequest::new("elantris", "brandon")
            .with_read(true)
            .with_pages(500);

        assert_eq!(request.title, "elantris");
        assert_eq!(request.author, "brandon");
        assert!(request.read);
        assert_eq!(request.page_override(), Some(500));
    }

    #[test]
    fn test_zero_pages_is_no_override() {
        let request = LookupRequest::new("mistborn", "brandon sanderson").with_pages(0);
        assert_eq!(request.page_override(), None);
        assert_eq!(LookupRequest::new("a", "b").page_override(), None);
    }
}
