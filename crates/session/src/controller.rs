// crates/session/src/controller.rs
//! Async driver that owns a session and performs its lookups

use crate::events::{Effect, Event};
use crate::state::Session;
use bookcase_metadata::{LookupRequest, MetadataSource};
use futures::future::try_join_all;
use std::collections::VecDeque;

/// Runs a [`Session`] against a metadata source
///
/// `FetchMetadata` effects are carried out here and their results fed back
/// into the session; everything else is returned for the host to present.
pub struct Controller<S> {
    session: Session,
    source: S,
}

impl<S: MetadataSource> Controller<S> {
    pub fn new(session: Session, source: S) -> Self {
        let provider = source.metadata().name;
        Self {
            session: session.with_provider(provider),
            source,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Handles one event to completion, including any lookup it triggers
    pub async fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        let mut queue = VecDeque::from([event]);
        let mut presented = Vec::new();

        while let Some(event) = queue.pop_front() {
            for effect in self.session.handle(event) {
                match effect {
                    Effect::FetchMetadata(request) => {
                        let result = self.source.lookup(&request).await;
                        queue.push_back(Event::MetadataLoaded(result));
                    }
                    other => presented.push(other),
                }
            }
        }

        presented
    }

    /// Looks up every request concurrently and adds them as one group
    ///
    /// If any lookup fails nothing is added; the failure is only logged.
    pub async fn seed(&mut self, requests: &[LookupRequest]) -> Vec<Effect> {
        if requests.is_empty() {
            return Vec::new();
        }

        log::info!("Seeding library with {} lookup(s)", requests.len());
        let result = try_join_all(requests.iter().map(|r| self.source.lookup(r))).await;
        self.dispatch(Event::SeedLoaded(result)).await
    }
}
