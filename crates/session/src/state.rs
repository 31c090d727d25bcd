// crates/session/src/state.rs
//! Session state and the event handler

use crate::error::{SessionError, SessionResult};
use crate::events::{Effect, Event, ModalTarget, NotifyLevel};
use crate::render::{render_cards, CardView};
use bookcase_config::LibraryConfig;
use bookcase_core::{Book, Isbn};
use bookcase_forms::{rules, Form, FormValidator, RuleAggregation, AUTHOR, TITLE};
use bookcase_library::{DuplicatePolicy, Library};
use bookcase_metadata::{LookupRequest, SourceError, SourceResult};

/// Provider named in lookup failure notices until the host says otherwise
const DEFAULT_PROVIDER: &str = "Google Books";

/// Everything one tracking session owns
///
/// The session is a pure state machine: `handle` mutates state and returns
/// the effects the host has to carry out. Network lookups are requested with
/// `Effect::FetchMetadata` and their results fed back as events.
#[derive(Debug)]
pub struct Session {
    library: Library,
    form: Form,
    validator: FormValidator,
    modal_open: bool,
    pending: Option<LookupRequest>,
    provider: String,
}

impl Session {
    /// Creates a session with the add-book form and its default rules
    pub fn new(policy: DuplicatePolicy, aggregation: RuleAggregation) -> SessionResult<Self> {
        let mut validator = FormValidator::new().with_aggregation(aggregation);
        // The charset rule goes last so it decides under every aggregation mode
        validator.register_custom_validation(TITLE, rules::not_blank);
        validator.register_custom_validation(TITLE, rules::title_charset()?);
        validator.register_custom_validation(AUTHOR, rules::not_blank);

        Ok(Self {
            library: Library::new(policy),
            form: Form::book_entry(),
            validator,
            modal_open: false,
            pending: None,
            provider: DEFAULT_PROVIDER.to_string(),
        })
    }

    /// Creates a session from the library section of the configuration
    pub fn from_config(config: &LibraryConfig) -> SessionResult<Self> {
        Self::new(config.duplicate_policy, config.rule_aggregation)
    }

    /// Sets the provider name used in lookup failure notices
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Gives access to the validator, e.g. to register more rules
    pub fn validator_mut(&mut self) -> &mut FormValidator {
        &mut self.validator
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// The lookup issued by the last successful submit, until its result arrives
    pub fn pending(&self) -> Option<&LookupRequest> {
        self.pending.as_ref()
    }

    /// The current card list
    pub fn cards(&self) -> Vec<CardView> {
        render_cards(&self.library)
    }

    /// Applies one event and returns the effects it produced
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        log::debug!("Handling {:?}", event);

        match event {
            Event::AddTrigger => {
                self.modal_open = true;
                vec![Effect::ShowModal]
            }
            Event::ModalClick(ModalTarget::Backdrop) => {
                self.modal_open = false;
                vec![Effect::HideModal]
            }
            // Clicks inside the dialog never reach the backdrop
            Event::ModalClick(ModalTarget::Content) => Vec::new(),
            Event::FieldInput { field, value } => match self.form.set_value(&field, &value) {
                Ok(()) => Vec::new(),
                Err(e) => {
                    log::warn!("Ignoring input for '{}': {}", field, e);
                    vec![Effect::Notify(NotifyLevel::Warning, e.to_string())]
                }
            },
            Event::FieldBlur(name) => self.blur(&name),
            Event::Submit => self.submit(),
            Event::MetadataLoaded(result) => self.metadata_loaded(result),
            Event::SeedLoaded(result) => self.seed_loaded(result),
            Event::CardToggle(isbn) => self.toggle(&isbn),
            Event::CardRemove(isbn) => {
                let removed = self.library.remove(&isbn);
                log::debug!("Removed {} book(s) with ISBN {}", removed, isbn);
                vec![self.render()]
            }
        }
    }

    fn render(&self) -> Effect {
        Effect::Render(self.cards())
    }

    fn blur(&mut self, name: &str) -> Vec<Effect> {
        self.validator.validate_named(&mut self.form, name);
        self.form
            .field(name)
            .map(|field| Effect::FieldUpdated(field.view()))
            .into_iter()
            .collect()
    }

    fn submit(&mut self) -> Vec<Effect> {
        let valid = self.validator.validate(&mut self.form);
        let mut effects: Vec<Effect> = self
            .form
            .views()
            .into_iter()
            .map(Effect::FieldUpdated)
            .collect();

        if !valid {
            log::debug!("Submit blocked by invalid fields");
            return effects;
        }

        match self.form.entry() {
            Ok(entry) => {
                let mut request = LookupRequest::new(entry.title, entry.author).with_read(entry.read);
                request.pages = entry.pages;

                log::info!("Looking up '{}' by '{}'", request.title, request.author);
                self.pending = Some(request.clone());
                effects.push(Effect::FetchMetadata(request));
            }
            Err(e) => {
                log::warn!("Could not read submitted form: {}", e);
                effects.push(Effect::Notify(
                    NotifyLevel::Error,
                    SessionError::from(e).user_message(),
                ));
            }
        }

        effects
    }

    fn metadata_loaded(&mut self, result: SourceResult<Book>) -> Vec<Effect> {
        let request = self.pending.take();
        let identifier = request
            .as_ref()
            .map(|r| r.title.clone())
            .unwrap_or_default();

        let book = match result {
            Ok(book) => book,
            Err(source) => {
                let err = self.lookup_error(identifier, source);
                log::warn!("{}", err);
                let (level, message) = err.notice();
                return vec![Effect::Notify(level, message)];
            }
        };

        let title = book.title.clone();
        if let Err(e) = self.library.add(book) {
            log::warn!("Could not add '{}': {}", title, e);
            return vec![Effect::Notify(
                NotifyLevel::Warning,
                SessionError::from(e).user_message(),
            )];
        }

        self.form.reset();
        self.modal_open = false;
        vec![Effect::HideModal, self.render()]
    }

    fn seed_loaded(&mut self, result: SourceResult<Vec<Book>>) -> Vec<Effect> {
        let books = match result {
            Ok(books) => books,
            Err(source) => {
                log::error!(
                    "{}",
                    self.lookup_error("startup books".to_string(), source)
                );
                return Vec::new();
            }
        };

        for book in books {
            let title = book.title.clone();
            if let Err(e) = self.library.add(book) {
                log::warn!("Skipping seeded book '{}': {}", title, e);
            }
        }

        log::info!("Library seeded with {} book(s)", self.library.len());
        vec![self.render()]
    }

    fn toggle(&mut self, isbn: &Isbn) -> Vec<Effect> {
        match self.library.toggle_read(isbn) {
            Ok(read) => {
                log::debug!("Book {} marked read={}", isbn, read);
                vec![self.render()]
            }
            Err(e) => vec![Effect::Notify(
                NotifyLevel::Warning,
                SessionError::from(e).user_message(),
            )],
        }
    }

    fn lookup_error(&self, identifier: String, source: SourceError) -> SessionError {
        SessionError::Lookup {
            provider: self.provider.clone(),
            identifier,
            source,
        }
    }
}
