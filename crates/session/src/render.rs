// crates/session/src/render.rs
//! Card rendering
//!
//! The card list is rebuilt from the whole library on every render; there is
//! no diffing against what was drawn before.

use bookcase_core::{Book, Isbn};
use bookcase_library::Library;
use std::fmt::Write;

/// Display data for one book card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub isbn: Isbn,
    pub title: String,
    pub author: String,
    pub pages: u32,
    pub image_link: String,
    pub read: bool,
}

impl CardView {
    /// CSS classes of the card element
    pub fn class_name(&self) -> &'static str {
        if self.read {
            "card read"
        } else {
            "card"
        }
    }
}

impl From<&Book> for CardView {
    fn from(book: &Book) -> Self {
        Self {
            isbn: book.isbn.clone(),
            title: book.title.clone(),
            author: book.author.to_string(),
            pages: book.pages,
            image_link: book.image_link.clone(),
            read: book.read,
        }
    }
}

/// Builds one card per book, in collection order
pub fn render_cards(library: &Library) -> Vec<CardView> {
    library.list().iter().map(CardView::from).collect()
}

/// Card markup for the books container
pub fn render_html(cards: &[CardView]) -> String {
    let mut html = String::new();
    for card in cards {
        // Writing to a String cannot fail
        let _ = write!(
            html,
            r#"<div class="{class}" data-isbn="{isbn}">
    <img src="{image}" alt="{title}">
    <div class="card-body">
        <h5 class="card-title">Title: {title}</h5>
        <p class="card-text">Author: {author}</p>
        <p class="card-text">Pages: {pages}</p>
        <p class="card-text isbn">ISBN: {isbn}</p>
        <button class="btn remove">Remove</button>
    </div>
</div>
"#,
            class = card.class_name(),
            isbn = escape(card.isbn.as_str()),
            image = escape(&card.image_link),
            title = escape(&card.title),
            author = escape(&card.author),
            pages = card.pages,
        );
    }
    html
}

/// Escapes text for use in element content and quoted attributes
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
