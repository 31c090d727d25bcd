//! Form fields and their built-in constraint validation
//!
//! A [`Field`] carries its own constraints (required, numeric bounds, length,
//! pattern) and reports a [`Validity`] the same way an HTML form control does,
//! including the human-readable message for the first failing constraint.

use crate::error::{FormError, FormResult};
use regex::Regex;
use std::fmt;

/// Input type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Checkbox,
}

/// Compiled pattern constraint, matched against the whole value
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compiles a pattern; like the HTML `pattern` attribute it must match the entire value
    pub fn new(source: &str) -> FormResult<Self> {
        let regex =
            Regex::new(&format!("^(?:{})$", source)).map_err(|e| FormError::InvalidPattern {
                pattern: source.to_string(),
                source: e,
            })?;

        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

/// Built-in constraints of a field
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Number fields only accept whole numbers
    pub integer: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Pattern>,
}

/// Result of the built-in constraint check, first failure wins
#[derive(Debug, Clone, PartialEq)]
pub enum Validity {
    Valid,
    ValueMissing,
    BadInput,
    TooLong { max: usize, actual: usize },
    TooShort { min: usize, actual: usize },
    RangeUnderflow { min: f64 },
    RangeOverflow { max: f64 },
    StepMismatch { value: f64 },
    PatternMismatch,
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// Human-readable message for this state; empty when valid
    pub fn message(&self, kind: FieldKind) -> String {
        match self {
            Validity::Valid => String::new(),
            Validity::ValueMissing if kind == FieldKind::Checkbox => {
                "Please check this box if you want to proceed.".to_string()
            }
            Validity::ValueMissing => "Please fill out this field.".to_string(),
            Validity::BadInput => "Please enter a number.".to_string(),
            Validity::TooLong { max, actual } => format!(
                "Please shorten this text to {} characters or less (you are currently using {} characters).",
                max, actual
            ),
            Validity::TooShort { min, actual } => format!(
                "Please lengthen this text to {} characters or more (you are currently using {} characters).",
                min, actual
            ),
            Validity::RangeUnderflow { min } => {
                format!("Value must be greater than or equal to {}.", min)
            }
            Validity::RangeOverflow { max } => {
                format!("Value must be less than or equal to {}.", max)
            }
            Validity::StepMismatch { value } => format!(
                "Please enter a valid value. The two nearest valid values are {} and {}.",
                value.floor(),
                value.ceil()
            ),
            Validity::PatternMismatch => "Please match the requested format.".to_string(),
        }
    }
}

/// Presentation state of a field after validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    /// Not validated since creation or the last reset
    #[default]
    Pristine,
    Valid,
    Invalid,
}

impl FieldStatus {
    /// CSS-style class name for the state, if any
    pub fn class_name(&self) -> Option<&'static str> {
        match self {
            FieldStatus::Pristine => None,
            FieldStatus::Valid => Some("valid"),
            FieldStatus::Invalid => Some("invalid"),
        }
    }
}

impl fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class_name().unwrap_or("pristine"))
    }
}

/// Snapshot of a field's presentation, handed to whatever draws the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub name: String,
    pub status: FieldStatus,
    pub error: String,
}

/// A single named input of a form
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    kind: FieldKind,
    constraints: Constraints,
    value: String,
    checked: bool,
    status: FieldStatus,
    /// Adjacent error-display slot
    error: String,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            constraints: Constraints::default(),
            value: String::new(),
            checked: false,
            status: FieldStatus::Pristine,
            error: String::new(),
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    pub fn checkbox(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Checkbox)
    }

    pub fn required(mut self) -> Self {
        self.constraints.required = true;
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.constraints.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.constraints.max = Some(max);
        self
    }

    pub fn integer(mut self) -> Self {
        self.constraints.integer = true;
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.constraints.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.constraints.max_length = Some(len);
        self
    }

    pub fn pattern(mut self, pattern: &str) -> FormResult<Self> {
        self.constraints.pattern = Some(Pattern::new(pattern)?);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn status(&self) -> FieldStatus {
        self.status
    }

    /// Current content of the error slot
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Runs the built-in constraint check against the current value
    pub fn check_validity(&self) -> Validity {
        if self.kind == FieldKind::Checkbox {
            return if self.constraints.required && !self.checked {
                Validity::ValueMissing
            } else {
                Validity::Valid
            };
        }

        if self.value.is_empty() {
            return if self.constraints.required {
                Validity::ValueMissing
            } else {
                Validity::Valid
            };
        }

        match self.kind {
            FieldKind::Number => self.check_number(),
            _ => self.check_text(),
        }
    }

    /// Built-in validation message for the current value
    pub fn validation_message(&self) -> String {
        self.check_validity().message(self.kind)
    }

    fn check_number(&self) -> Validity {
        let number = match self.value.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => n,
            _ => return Validity::BadInput,
        };

        if let Some(min) = self.constraints.min {
            if number < min {
                return Validity::RangeUnderflow { min };
            }
        }

        if let Some(max) = self.constraints.max {
            if number > max {
                return Validity::RangeOverflow { max };
            }
        }

        if self.constraints.integer && number.fract() != 0.0 {
            return Validity::StepMismatch { value: number };
        }

        Validity::Valid
    }

    fn check_text(&self) -> Validity {
        let actual = self.value.chars().count();

        if let Some(max) = self.constraints.max_length {
            if actual > max {
                return Validity::TooLong { max, actual };
            }
        }

        if let Some(min) = self.constraints.min_length {
            if actual < min {
                return Validity::TooShort { min, actual };
            }
        }

        if let Some(pattern) = &self.constraints.pattern {
            if !pattern.is_match(&self.value) {
                return Validity::PatternMismatch;
            }
        }

        Validity::Valid
    }

    /// Applies a validation outcome: exactly one of valid/invalid, and the slot gets `message`
    pub(crate) fn present(&mut self, valid: bool, message: String) {
        self.status = if valid {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        };
        self.error = message;
    }

    /// Clears value and presentation
    pub fn reset(&mut self) {
        self.value.clear();
        self.checked = false;
        self.status = FieldStatus::Pristine;
        self.error.clear();
    }

    pub fn view(&self) -> FieldView {
        FieldView {
            name: self.name.clone(),
            status: self.status,
            error: self.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_missing() {
        let field = Field::text("title").required();
        assert_eq!(field.check_validity(), Validity::ValueMissing);
        assert_eq!(field.validation_message(), "Please fill out this field.");
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let mut field = Field::text("title").required();
        field.set_value("   ");
        assert!(field.check_validity().is_valid());
    }

    #[test]
    fn test_optional_empty_is_valid() {
        let field = Field::number("pages").min(0.0);
        assert!(field.check_validity().is_valid());
        assert!(field.validation_message().is_empty());
    }

    #[test]
    fn test_number_bad_input() {
        let mut field = Field::number("pages");
        field.set_value("lots");
        assert_eq!(field.check_validity(), Validity::BadInput);
        assert_eq!(field.validation_message(), "Please enter a number.");
    }

    #[test]
    fn test_number_range() {
        let mut field = Field::number("pages").min(0.0).max(10000.0);

        field.set_value("-1");
        assert_eq!(
            field.validation_message(),
            "Value must be greater than or equal to 0."
        );

        field.set_value("10001");
        assert_eq!(
            field.validation_message(),
            "Value must be less than or equal to 10000."
        );

        field.set_value("500");
        assert!(field.check_validity().is_valid());
    }

    #[test]
    fn test_number_step_mismatch() {
        let mut field = Field::number("pages").integer();
        field.set_value("12.5");
        assert_eq!(field.check_validity(), Validity::StepMismatch { value: 12.5 });
        assert!(field.validation_message().contains("12 and 13"));
    }

    #[test]
    fn test_text_length() {
        let mut field = Field::text("title").min_length(2).max_length(5);

        field.set_value("a");
        assert_eq!(field.check_validity(), Validity::TooShort { min: 2, actual: 1 });

        field.set_value("abcdef");
        assert_eq!(field.check_validity(), Validity::TooLong { max: 5, actual: 6 });

        field.set_value("abc");
        assert!(field.check_validity().is_valid());
    }

    #[test]
    fn test_pattern_matches_whole_value() {
        let mut field = Field::text("code").pattern("[0-9]+").unwrap();

        field.set_value("123");
        assert!(field.check_validity().is_valid());

        field.set_value("123a");
        assert_eq!(field.check_validity(), Validity::PatternMismatch);
        assert_eq!(
            field.validation_message(),
            "Please match the requested format."
        );
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let result = Field::text("code").pattern("(unclosed");
        assert!(matches!(result, Err(FormError::InvalidPattern { .. })));
    }

    #[test]
    fn test_required_checkbox() {
        let mut field = Field::checkbox("terms").required();
        assert_eq!(
            field.validation_message(),
            "Please check this box if you want to proceed."
        );
        field.set_checked(true);
        assert!(field.check_validity().is_valid());
    }

    #[test]
    fn test_present_and_reset() {
        let mut field = Field::text("title");
        field.set_value("x");
        field.present(false, "bad".to_string());
        assert_eq!(field.status(), FieldStatus::Invalid);
        assert_eq!(field.error(), "bad");

        field.present(true, String::new());
        assert_eq!(field.status(), FieldStatus::Valid);
        assert!(field.error().is_empty());

        field.reset();
        assert_eq!(field.status(), FieldStatus::Pristine);
        assert!(field.value().is_empty());
    }

    #[test]
    fn test_status_class_names() {
        assert_eq!(FieldStatus::Valid.class_name(), Some("valid"));
        assert_eq!(FieldStatus::Invalid.class_name(), Some("invalid"));
        assert_eq!(FieldStatus::Pristine.class_name(), None);
        assert_eq!(FieldStatus::Pristine.to_string(), "pristine");
    }
}
