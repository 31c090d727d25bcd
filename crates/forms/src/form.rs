//! Ordered collection of fields and the book entry form

use crate::error::{FormError, FormResult};
use crate::field::{Field, FieldKind, FieldView};

pub const TITLE: &str = "title";
pub const AUTHOR: &str = "author";
pub const PAGES: &str = "pages";
pub const READ: &str = "read";

/// Values of a submitted book entry form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookEntry {
    pub title: String,
    pub author: String,
    /// Page count override; `None` when left empty or zero
    pub pages: Option<u32>,
    pub read: bool,
}

/// A form: fields in document order
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: Vec<Field>,
}

impl Form {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// The add-book form: required title and author, optional page count and read flag
    pub fn book_entry() -> Self {
        Self::new(vec![
            Field::text(TITLE).required(),
            Field::text(AUTHOR).required(),
            Field::number(PAGES).min(0.0).max(f64::from(u32::MAX)).integer(),
            Field::checkbox(READ),
        ])
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        self.fields.iter_mut()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    /// Sets a text/number value, or the checked state of a checkbox from a yes/no answer
    pub fn set_value(&mut self, name: &str, value: &str) -> FormResult<()> {
        let field = self
            .field_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;

        if field.kind() == FieldKind::Checkbox {
            let checked = parse_checked(value).ok_or_else(|| FormError::InvalidValue {
                field: name.to_string(),
                value: value.to_string(),
            })?;
            field.set_checked(checked);
        } else {
            field.set_value(value);
        }

        Ok(())
    }

    pub fn set_checked(&mut self, name: &str, checked: bool) -> FormResult<()> {
        self.field_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?
            .set_checked(checked);
        Ok(())
    }

    /// Empties every field and clears its presentation
    pub fn reset(&mut self) {
        self.fields.iter_mut().for_each(Field::reset);
    }

    pub fn views(&self) -> Vec<FieldView> {
        self.fields.iter().map(Field::view).collect()
    }

    /// Reads the book entry values out of the form
    pub fn entry(&self) -> FormResult<BookEntry> {
        let text = |name: &str| -> FormResult<String> {
            self.field(name)
                .map(|f| f.value().trim().to_string())
                .ok_or_else(|| FormError::UnknownField(name.to_string()))
        };

        // Same number grammar as the native check, so "1e3" and "-0" agree with it
        let pages_raw = text(PAGES)?;
        let pages = if pages_raw.is_empty() {
            None
        } else {
            let pages = pages_raw
                .parse::<f64>()
                .ok()
                .filter(|n| {
                    n.is_finite() && n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(n)
                })
                .ok_or_else(|| FormError::InvalidValue {
                    field: PAGES.to_string(),
                    value: pages_raw.clone(),
                })?;
            Some(pages as u32).filter(|&p| p > 0)
        };

        let read = self
            .field(READ)
            .map(Field::is_checked)
            .ok_or_else(|| FormError::UnknownField(READ.to_string()))?;

        Ok(BookEntry {
            title: text(TITLE)?,
            author: text(AUTHOR)?,
            pages,
            read,
        })
    }
}

fn parse_checked(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "on" | "1" => Some(true),
        "" | "n" | "no" | "false" | "off" | "0" => Some(false),
        _ => None,
    }
}
