//! Bookcase form validation
//!
//! A small validation engine for the add-book form:
//!
//! - [`Field`] models an input with built-in constraints (required, numeric
//!   bounds, length, pattern) and reports host-style validation messages
//! - [`FormValidator`] layers pluggable custom rules on top, per field, and
//!   records the outcome on the field as presentation state
//! - [`Form::book_entry`] is the form the session drives
//!
//! # Example
//!
//! ```rust
//! use bookcase_forms::{rules, Form, FormValidator};
//!
//! let mut form = Form::book_entry();
//! let mut validator = FormValidator::new();
//! validator.register_custom_validation("title", rules::title_charset().unwrap());
//!
//! form.set_value("title", "Mistborn!").unwrap();
//! form.set_value("author", "Brandon Sanderson").unwrap();
//! assert!(!validator.validate(&mut form));
//! assert_eq!(form.field("title").unwrap().error(), rules::TITLE_CHARSET_MESSAGE);
//! ```

mod error;
mod field;
mod form;
pub mod rules;
mod validator;

pub use error::{FormError, FormResult};
pub use field::{Constraints, Field, FieldKind, FieldStatus, FieldView, Pattern, Validity};
pub use form::{BookEntry, Form, AUTHOR, PAGES, READ, TITLE};
pub use validator::{FormValidator, Rule, RuleAggregation};
