//! Reusable custom validation rules

use crate::error::{FormError, FormResult};
use crate::field::Field;
use regex::Regex;

pub const TITLE_CHARSET_MESSAGE: &str = "Title must only contain letters, numbers, and spaces";
pub const NOT_BLANK_MESSAGE: &str = "Must contain more than whitespace";

/// Fails with `message` unless the whole value matches `pattern`
pub fn matches(
    pattern: &str,
    message: impl Into<String>,
) -> FormResult<impl Fn(&Field) -> String + Send + Sync + 'static> {
    let regex = Regex::new(pattern).map_err(|e| FormError::InvalidPattern {
        pattern: pattern.to_string(),
        source: e,
    })?;
    let message = message.into();

    Ok(move |field: &Field| {
        if regex.is_match(field.value()) {
            String::new()
        } else {
            message.clone()
        }
    })
}

/// Titles may only contain ASCII letters, digits and whitespace
pub fn title_charset() -> FormResult<impl Fn(&Field) -> String + Send + Sync + 'static> {
    matches(r"^[a-zA-Z0-9\s]*$", TITLE_CHARSET_MESSAGE)
}

/// Rejects values made only of whitespace, which the required check accepts
pub fn not_blank(field: &Field) -> String {
    if !field.value().is_empty() && field.value().trim().is_empty() {
        NOT_BLANK_MESSAGE.to_string()
    } else {
        String::new()
    }
}
