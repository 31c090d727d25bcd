// Integration tests for the book entry form validation

use bookcase_forms::{
    rules, Field, FieldStatus, Form, FormValidator, RuleAggregation, AUTHOR, PAGES, READ, TITLE,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn entry_validator() -> FormValidator {
    // Rule registration and field outcomes are logged at debug/trace
    let _ = env_logger::builder().is_test(true).try_init();

    let mut validator = FormValidator::new();
    validator.register_custom_validation(TITLE, rules::title_charset().unwrap());
    validator
}

fn filled_form(title: &str) -> Form {
    let mut form = Form::book_entry();
    form.set_value(TITLE, title).unwrap();
    form.set_value(AUTHOR, "Brandon Sanderson").unwrap();
    form
}

#[test]
fn test_title_with_punctuation_fails_custom_rule() {
    let validator = entry_validator();
    let mut form = filled_form("Mistborn!");

    let title = form.field_mut(TITLE).unwrap();
    assert!(title.check_validity().is_valid());
    assert!(!validator.validate_field(title));
    assert_eq!(title.status(), FieldStatus::Invalid);
    assert_eq!(title.error(), rules::TITLE_CHARSET_MESSAGE);
}

#[test]
fn test_title_with_digits_and_spaces_passes() {
    let validator = entry_validator();
    let mut form = filled_form("Mistborn 2");

    assert!(validator.validate_named(&mut form, TITLE));
    let title = form.field(TITLE).unwrap();
    assert_eq!(title.status(), FieldStatus::Valid);
    assert!(title.error().is_empty());
}

#[test]
fn test_empty_required_title_reports_native_message_only() {
    let invoked = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&invoked);

    let mut validator = FormValidator::new();
    validator.register_custom_validation(TITLE, move |_: &Field| {
        flag.store(true, Ordering::SeqCst);
        "custom".to_string()
    });

    let mut form = Form::book_entry();
    assert!(!validator.validate_named(&mut form, TITLE));
    assert_eq!(
        form.field(TITLE).unwrap().error(),
        "Please fill out this field."
    );
    assert!(!invoked.load(Ordering::SeqCst));
}

#[test]
fn test_form_invalid_when_only_an_early_field_fails() {
    let validator = entry_validator();
    let mut form = filled_form("Mistborn!");
    form.set_value(PAGES, "300").unwrap();
    form.set_checked(READ, true).unwrap();

    // The last field passes; the form still fails because the title does
    assert!(!validator.validate(&mut form));
    assert_eq!(form.field(READ).unwrap().status(), FieldStatus::Valid);
}

#[test]
fn test_form_valid_when_every_field_passes() {
    let validator = entry_validator();
    let mut form = filled_form("The Way of Kings");
    form.set_value(PAGES, "1007").unwrap();

    assert!(validator.validate(&mut form));
    assert!(form
        .fields()
        .iter()
        .all(|f| f.status() == FieldStatus::Valid && f.error().is_empty()));

    let entry = form.entry().unwrap();
    assert_eq!(entry.pages, Some(1007));
}

#[test]
fn test_negative_pages_rejected_natively() {
    let validator = entry_validator();
    let mut form = filled_form("Elantris");
    form.set_value(PAGES, "-5").unwrap();

    assert!(!validator.validate(&mut form));
    assert_eq!(
        form.field(PAGES).unwrap().error(),
        "Value must be greater than or equal to 0."
    );
}

#[test]
fn test_aggregation_modes_disagree_on_early_failure() {
    let build = |aggregation| {
        let mut validator = FormValidator::new().with_aggregation(aggregation);
        validator.register_custom_validation(TITLE, |_: &Field| "first".to_string());
        validator.register_custom_validation(TITLE, |_: &Field| String::new());
        validator
    };

    let mut field = Field::text(TITLE);
    field.set_value("anything");

    assert!(!build(RuleAggregation::LastFailure).validate_field(&mut field));
    assert_eq!(field.error(), "first");

    assert!(!build(RuleAggregation::FirstFailure).validate_field(&mut field));
    assert_eq!(field.error(), "first");

    assert!(build(RuleAggregation::Overwrite).validate_field(&mut field));
    assert!(field.error().is_empty());
}
