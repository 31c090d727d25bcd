//! Error types for the forms crate

use thiserror::Error;

/// Result type for form operations
pub type FormResult<T> = Result<T, FormError>;

/// Errors raised while building forms or reading submitted values
///
/// Field validation failures are not errors: they are reported through the
/// field's presentation state.
#[derive(Debug, Error)]
pub enum FormError {
    /// A pattern constraint or rule did not compile
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The form has no field with this name
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A submitted value could not be interpreted
    #[error("Field '{field}' has invalid value '{value}'")]
    InvalidValue { field: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FormError::UnknownField("isbn".to_string());
        assert_eq!(err.to_string(), "Unknown field: isbn");

        let err = FormError::InvalidValue {
            field: "pages".to_string(),
            value: "many".to_string(),
        };
        assert!(err.to_string().contains("pages"));
    }
}
