// FILE: crates/library/src/manager.rs

use crate::error::{LibraryError, Result};
use crate::DuplicatePolicy;
use bookcase_core::{Book, Isbn, Validator};
use log::{debug, info};

/// In-memory book collection, in insertion order
///
/// Books are keyed by ISBN. Lookups return the first match; removal drops
/// every entry with the ISBN, which also clears duplicates admitted under
/// [`DuplicatePolicy::Allow`].
#[derive(Debug, Clone, Default)]
pub struct Library {
    books: Vec<Book>,
    policy: DuplicatePolicy,
}

impl Library {
    /// Create an empty library
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            books: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Add a book at the end of the collection
    ///
    /// A book whose ISBN is already tracked is appended, rejected or swapped
    /// in place depending on the duplicate policy.
    pub fn add(&mut self, book: Book) -> Result<()> {
        book.validate()
            .map_err(|errors| LibraryError::InvalidBook(errors.join("; ")))?;

        match self.position(&book.isbn) {
            Some(index) => match self.policy {
                DuplicatePolicy::Allow => {
                    debug!("Adding duplicate ISBN {}", book.isbn);
                    self.books.push(book);
                }
                DuplicatePolicy::Reject => {
                    return Err(LibraryError::DuplicateIsbn(book.isbn));
                }
                DuplicatePolicy::Replace => {
                    info!("Replacing book with ISBN {}", book.isbn);
                    self.books[index] = book;
                }
            },
            None => {
                info!("Added '{}' ({})", book.title, book.isbn);
                self.books.push(book);
            }
        }

        Ok(())
    }

    /// Remove every book with this ISBN, returning how many were removed
    pub fn remove(&mut self, isbn: &Isbn) -> usize {
        let before = self.books.len();
        self.books.retain(|book| &book.isbn != isbn);
        let removed = before - self.books.len();
        if removed > 0 {
            info!("Removed {} book(s) with ISBN {}", removed, isbn);
        }
        removed
    }

    /// First book with this ISBN
    pub fn get(&self, isbn: &Isbn) -> Option<&Book> {
        self.books.iter().find(|book| &book.isbn == isbn)
    }

    /// All books in insertion order
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    /// Flip the read flag of the first book with this ISBN
    pub fn toggle_read(&mut self, isbn: &Isbn) -> Result<bool> {
        let book = self
            .books
            .iter_mut()
            .find(|book| &book.isbn == isbn)
            .ok_or_else(|| LibraryError::BookNotFound(isbn.clone()))?;
        let read = book.toggle_read();
        debug!("'{}' marked {}", book.title, if read { "read" } else { "unread" });
        Ok(read)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Get library statistics
    pub fn stats(&self) -> LibraryStats {
        let total_books = self.books.len();
        let read_count = self.books.iter().filter(|b| b.read).count();
        let total_pages = self.books.iter().map(|b| u64::from(b.pages)).sum();
        let pages_read = self
            .books
            .iter()
            .filter(|b| b.read)
            .map(|b| u64::from(b.pages))
            .sum();

        LibraryStats {
            total_books,
            read_count,
            unread_count: total_books - read_count,
            total_pages,
            pages_read,
        }
    }

    fn position(&self, isbn: &Isbn) -> Option<usize> {
        self.books.iter().position(|book| &book.isbn == isbn)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LibraryStats {
    pub total_books: usize,
    pub read_count: usize,
    pub unread_count: usize,
    pub total_pages: u64,
    pub pages_read: u64,
}
