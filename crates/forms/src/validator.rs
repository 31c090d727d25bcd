//! Rule-based form validator
//!
//! Custom rules are layered on top of the built-in constraint check of each
//! field. A rule receives the field and returns an error message; the empty
//! string means the rule passed. Rules only run when the built-in check
//! passes, so a missing required value is always reported with the built-in
//! message.

use crate::field::Field;
use crate::form::Form;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A custom validation rule: returns an error message, empty when valid
pub type Rule = Box<dyn Fn(&Field) -> String + Send + Sync>;

/// How the messages of several rules on one field combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleAggregation {
    /// Run every rule; the last failing rule's message is shown
    #[default]
    LastFailure,
    /// Stop at the first failing rule
    FirstFailure,
    /// Every rule overwrites the message, so only the last rule decides
    Overwrite,
}

impl fmt::Display for RuleAggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleAggregation::LastFailure => write!(f, "last-failure"),
            RuleAggregation::FirstFailure => write!(f, "first-failure"),
            RuleAggregation::Overwrite => write!(f, "overwrite"),
        }
    }
}

/// Validates fields against built-in constraints plus registered custom rules
#[derive(Default)]
pub struct FormValidator {
    rules: HashMap<String, Vec<Rule>>,
    aggregation: RuleAggregation,
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aggregation(mut self, aggregation: RuleAggregation) -> Self {
        self.aggregation = aggregation;
        self
    }

    pub fn aggregation(&self) -> RuleAggregation {
        self.aggregation
    }

    /// Associates `rule` with the field named `field`
    ///
    /// The first registration for a field creates its rule list; later ones
    /// append, so rules run in registration order.
    pub fn register_custom_validation<F>(&mut self, field: &str, rule: F)
    where
        F: Fn(&Field) -> String + Send + Sync + 'static,
    {
        self.rules
            .entry(field.to_string())
            .or_default()
            .push(Box::new(rule));
        log::debug!("Registered custom validation for field '{}'", field);
    }

    /// Number of custom rules registered for a field
    pub fn rule_count(&self, field: &str) -> usize {
        self.rules.get(field).map_or(0, Vec::len)
    }

    /// Validates one field and updates its presentation
    ///
    /// Valid iff the built-in check passes and the custom rules produce no
    /// message. The error slot receives the custom message if there is one,
    /// otherwise the built-in message, which is empty on success.
    pub fn validate_field(&self, field: &mut Field) -> bool {
        let base = field.check_validity();
        let base_valid = base.is_valid();

        let custom_message = if base_valid {
            self.custom_message(field)
        } else {
            String::new()
        };

        let valid = base_valid && custom_message.is_empty();
        let message = if custom_message.is_empty() {
            base.message(field.kind())
        } else {
            custom_message
        };

        log::trace!(
            "Field '{}' validated: valid={} message={:?}",
            field.name(),
            valid,
            message
        );
        field.present(valid, message);
        valid
    }

    /// Validates every field in document order
    ///
    /// All fields are visited and re-rendered even after a failure; the result
    /// is true only if every field passed.
    pub fn validate(&self, form: &mut Form) -> bool {
        let mut all_valid = true;
        for field in form.fields_mut() {
            let valid = self.validate_field(field);
            all_valid &= valid;
        }
        all_valid
    }

    /// Validates the field named `name`, as when it loses focus
    pub fn validate_named(&self, form: &mut Form, name: &str) -> bool {
        match form.field_mut(name) {
            Some(field) => self.validate_field(field),
            None => {
                log::warn!("Cannot validate unknown field '{}'", name);
                false
            }
        }
    }

    fn custom_message(&self, field: &Field) -> String {
        let Some(rules) = self.rules.get(field.name()) else {
            return String::new();
        };

        let mut message = String::new();
        for rule in rules {
            let result = rule(field);
            match self.aggregation {
                RuleAggregation::Overwrite => message = result,
                RuleAggregation::LastFailure => {
                    if !result.is_empty() {
                        message = result;
                    }
                }
                RuleAggregation::FirstFailure => {
                    if !result.is_empty() {
                        return result;
                    }
                }
            }
        }
        message
    }
}

impl fmt::Debug for FormValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<&str, usize> = self
            .rules
            .iter()
            .map(|(name, rules)| (name.as_str(), rules.len()))
            .collect();
        f.debug_struct("FormValidator")
            .field("rules", &counts)
            .field("aggregation", &self.aggregation)
            .finish()
    }
}
