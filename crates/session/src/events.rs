// crates/session/src/events.rs
//! Events the host feeds into a session and the effects it gets back

use crate::render::CardView;
use bookcase_core::{Book, Isbn};
use bookcase_forms::FieldView;
use bookcase_metadata::{LookupRequest, SourceResult};
use std::fmt;

/// Where a click on the open modal landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTarget {
    /// The dimmed area around the dialog
    Backdrop,
    /// Inside the dialog itself
    Content,
}

/// Session events
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The "new book" trigger was pressed
    AddTrigger,
    /// A click on the modal
    ModalClick(ModalTarget),
    /// A field's value changed; checkboxes take a yes/no answer
    FieldInput { field: String, value: String },
    /// A field lost focus
    FieldBlur(String),
    /// The entry form was submitted
    Submit,
    /// A lookup issued for a submitted form finished
    MetadataLoaded(SourceResult<Book>),
    /// The startup lookups finished as a group
    SeedLoaded(SourceResult<Vec<Book>>),
    /// A card was clicked
    CardToggle(Isbn),
    /// A card's remove button was clicked
    CardRemove(Isbn),
}

/// Severity of a notice shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for NotifyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyLevel::Info => write!(f, "info"),
            NotifyLevel::Warning => write!(f, "warning"),
            NotifyLevel::Error => write!(f, "error"),
        }
    }
}

/// Side effects the host performs after an event
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Display the entry modal
    ShowModal,
    /// Hide the entry modal
    HideModal,
    /// Redraw one field's validity class and error slot
    FieldUpdated(FieldView),
    /// Look the book up; the result comes back as `Event::MetadataLoaded`
    FetchMetadata(LookupRequest),
    /// Replace every card with this list
    Render(Vec<CardView>),
    /// Show a notice
    Notify(NotifyLevel, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_equality() {
        assert_eq!(Event::AddTrigger, Event::AddTrigger);
        assert_ne!(
            Event::ModalClick(ModalTarget::Backdrop),
            Event::ModalClick(ModalTarget::Content)
        );
    }

    #[test]
    fn test_notify_level_display() {
        assert_eq!(NotifyLevel::Warning.to_string(), "warning");
    }
}
