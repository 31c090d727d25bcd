// crates/session/src/lib.rs
//! Book tracking session
//!
//! A [`Session`] holds the collection, the entry form and its validator, and
//! turns [`Event`]s into [`Effect`]s. A [`Controller`] drives a session
//! against a [`bookcase_metadata::MetadataSource`], performing lookups and
//! feeding their results back.

mod controller;
mod error;
mod events;
mod render;
mod state;

pub use controller::Controller;
pub use error::{SessionError, SessionResult};
pub use events::{Effect, Event, ModalTarget, NotifyLevel};
pub use render::{render_cards, render_html, CardView};
pub use state::Session;

use bookcase_config::SeedBook;
use bookcase_metadata::LookupRequest;

/// Turns configured seed books into lookup requests
pub fn seed_requests(seeds: &[SeedBook]) -> Vec<LookupRequest> {
    seeds
        .iter()
        .map(|seed| {
            let mut request =
                LookupRequest::new(seed.title.clone(), seed.author.clone()).with_read(seed.read);
            request.pages = seed.pages;
            request
        })
        .collect()
}
