// crates/session/tests/controller_tests.rs
// Drives a session end to end against an in-memory metadata source

use anyhow::Result;
use bookcase_config::LibraryConfig;
use bookcase_core::{Authors, Book, Isbn};
use bookcase_forms::{rules, FieldStatus, RuleAggregation, AUTHOR, PAGES, READ, TITLE};
use bookcase_library::DuplicatePolicy;
use bookcase_metadata::{LookupRequest, MetadataSource, SourceError, SourceMetadata, SourceResult};
use bookcase_session::{
    render_html, seed_requests, Controller, Effect, Event, ModalTarget, NotifyLevel, Session,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// Answers lookups from a fixed table keyed by title
struct FakeSource {
    books: HashMap<String, Book>,
    calls: Mutex<Vec<LookupRequest>>,
}

impl FakeSource {
    fn new() -> Self {
        let mut books = HashMap::new();
        for (query, title, isbn, pages) in [
            ("the way of kings", "The Way of Kings", "9780765326355", 1007),
            ("mistborn", "Mistborn", "9780765311788", 541),
            ("elantris", "Elantris", "9780765350374", 638),
        ] {
            books.insert(
                query.to_string(),
                Book::new(title, Authors::many(["Brandon Sanderson"]), isbn, pages)
                    .with_image_link(format!("http://books.google.com/{}.jpg", isbn)),
            );
        }
        Self {
            books,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }
}

impl MetadataSource for FakeSource {
    async fn lookup(&self, request: &LookupRequest) -> SourceResult<Book> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request.clone());
        }
        let mut book = self
            .books
            .get(&request.title)
            .cloned()
            .ok_or(SourceError::NotFound)?;
        if let Some(pages) = request.page_override() {
            book.pages = pages;
        }
        book.read = request.read;
        Ok(book)
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Fake Books".to_string(),
            description: "In-memory lookups".to_string(),
            base_url: "memory://".to_string(),
            requires_auth: false,
        }
    }
}

fn controller() -> Result<Controller<FakeSource>> {
    let session = Session::new(DuplicatePolicy::Reject, RuleAggregation::LastFailure)?;
    Ok(Controller::new(session, FakeSource::new()))
}

fn input(field: &str, value: &str) -> Event {
    Event::FieldInput {
        field: field.to_string(),
        value: value.to_string(),
    }
}

#[tokio::test]
async fn test_seeding_adds_all_books_with_one_render() -> Result<()> {
    let mut controller = controller()?;
    let requests = seed_requests(&LibraryConfig::default().seeds);

    let effects = controller.seed(&requests).await;

    assert_eq!(effects.len(), 1);
    let Effect::Render(cards) = &effects[0] else {
        panic!("expected a render, got {:?}", effects);
    };
    let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["The Way of Kings", "Mistborn", "Elantris"]);

    // Page override wins over the service's count
    assert_eq!(cards[2].pages, 500);
    assert!(cards[0].read && !cards[1].read && cards[2].read);
    assert_eq!(controller.source().call_count(), 3);

    Ok(())
}

#[tokio::test]
async fn test_seeding_is_all_or_nothing() -> Result<()> {
    let mut controller = controller()?;
    let requests = vec![
        LookupRequest::new("mistborn", "brandon sanderson"),
        LookupRequest::new("unknown book", "nobody"),
    ];

    let effects = controller.seed(&requests).await;

    assert!(effects.is_empty());
    assert!(controller.session().library().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_empty_seed_list_does_nothing() -> Result<()> {
    let mut controller = controller()?;
    assert!(controller.seed(&[]).await.is_empty());
    assert_eq!(controller.source().call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_add_book_flow() -> Result<()> {
    let mut controller = controller()?;

    assert_eq!(
        controller.dispatch(Event::AddTrigger).await,
        vec![Effect::ShowModal]
    );
    controller.dispatch(input(TITLE, "elantris")).await;
    controller.dispatch(input(AUTHOR, "brandon")).await;
    controller.dispatch(input(PAGES, "500")).await;
    controller.dispatch(input(READ, "y")).await;

    let effects = controller.dispatch(Event::Submit).await;

    // Four field updates, then the modal closes and the cards are redrawn
    assert_eq!(effects.len(), 6);
    assert!(effects[..4]
        .iter()
        .all(|e| matches!(e, Effect::FieldUpdated(view) if view.status == FieldStatus::Valid)));
    assert_eq!(effects[4], Effect::HideModal);
    let Effect::Render(cards) = &effects[5] else {
        panic!("expected a render, got {:?}", effects[5]);
    };
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].pages, 500);
    assert!(cards[0].read);

    assert!(!controller.session().is_modal_open());
    assert_eq!(controller.session().form().field(TITLE).map(|f| f.value()), Some(""));

    let html = render_html(cards);
    assert!(html.contains(r#"<div class="card read" data-isbn="9780765350374">"#));

    Ok(())
}

#[tokio::test]
async fn test_invalid_title_blocks_lookup() -> Result<()> {
    let mut controller = controller()?;
    controller.dispatch(Event::AddTrigger).await;
    controller.dispatch(input(TITLE, "Mistborn!")).await;
    controller.dispatch(input(AUTHOR, "Brandon Sanderson")).await;

    let blur = controller.dispatch(Event::FieldBlur(TITLE.to_string())).await;
    assert!(matches!(
        blur.as_slice(),
        [Effect::FieldUpdated(view)] if view.error == rules::TITLE_CHARSET_MESSAGE
    ));

    let effects = controller.dispatch(Event::Submit).await;
    assert_eq!(effects.len(), 4);
    assert_eq!(controller.source().call_count(), 0);
    assert!(controller.session().is_modal_open());

    Ok(())
}

#[tokio::test]
async fn test_failed_lookup_notifies_and_keeps_form() -> Result<()> {
    let mut controller = controller()?;
    controller.dispatch(Event::AddTrigger).await;
    controller.dispatch(input(TITLE, "unknown book")).await;
    controller.dispatch(input(AUTHOR, "nobody")).await;

    let effects = controller.dispatch(Event::Submit).await;

    assert_eq!(
        effects.last(),
        Some(&Effect::Notify(
            NotifyLevel::Error,
            "No book matching 'unknown book' was found.".to_string()
        ))
    );
    assert!(controller.session().is_modal_open());
    assert_eq!(
        controller.session().form().field(TITLE).map(|f| f.value()),
        Some("unknown book")
    );

    Ok(())
}

#[tokio::test]
async fn test_cards_toggle_and_remove() -> Result<()> {
    let mut controller = controller()?;
    controller
        .seed(&[LookupRequest::new("mistborn", "brandon sanderson")])
        .await;
    let isbn = Isbn::new("9780765311788");

    let effects = controller.dispatch(Event::CardToggle(isbn.clone())).await;
    assert!(matches!(&effects[..], [Effect::Render(cards)] if cards[0].read));

    let effects = controller.dispatch(Event::CardToggle(isbn.clone())).await;
    assert!(matches!(&effects[..], [Effect::Render(cards)] if !cards[0].read));

    let effects = controller.dispatch(Event::CardRemove(isbn)).await;
    assert_eq!(effects, vec![Effect::Render(Vec::new())]);

    Ok(())
}

#[tokio::test]
async fn test_backdrop_closes_modal_content_does_not() -> Result<()> {
    let mut controller = controller()?;
    controller.dispatch(Event::AddTrigger).await;

    assert!(controller
        .dispatch(Event::ModalClick(ModalTarget::Content))
        .await
        .is_empty());
    assert!(controller.session().is_modal_open());

    assert_eq!(
        controller
            .dispatch(Event::ModalClick(ModalTarget::Backdrop))
            .await,
        vec![Effect::HideModal]
    );
    Ok(())
}
