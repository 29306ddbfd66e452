// Validation errors

use std::fmt;
use thiserror::Error;

/// Validation error for a single field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Field name that failed validation
    pub field: String,

    /// Error message
    pub message: String,

    /// Validation constraint that failed
    pub constraint: String,

    /// Value that failed validation (absent for sensitive kinds)
    pub value: Option<String>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            constraint: "custom".to_string(),
            value: None,
        }
    }

    /// Set the constraint name
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = constraint.into();
        self
    }

    /// Set the invalid value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Collection of validation errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Errors recorded against one field
    pub fn get_field_errors(&self, field: &str) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "errors": self.errors.iter().map(|e| {
                serde_json::json!({
                    "field": e.field,
                    "message": e.message,
                    "constraint": e.constraint,
                    "value": e.value,
                })
            }).collect::<Vec<_>>()
        })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::new(errors)
    }
}

/// Errors raised while loading a [`ValidationSchema`](crate::ValidationSchema)
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Failed to parse validation schema: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Field `{0}` lists no rules")]
    EmptyField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ValidationError::new("email", "email must be a valid email address")
            .with_constraint("isEmail")
            .with_value("nope");

        assert_eq!(error.to_string(), "email: email must be a valid email address");
        assert_eq!(error.constraint, "isEmail");
        assert_eq!(error.value.as_deref(), Some("nope"));
    }

    #[test]
    fn test_default_constraint_is_custom() {
        let error = ValidationError::new("field", "bad");
        assert_eq!(error.constraint, "custom");
        assert!(error.value.is_none());
    }

    #[test]
    fn test_errors_collection() {
        let mut errors = ValidationErrors::default();
        assert!(errors.is_empty());

        errors.add(ValidationError::new("a", "first"));
        errors.add(ValidationError::new("b", "second"));
        errors.add(ValidationError::new("a", "third"));

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get_field_errors("a").len(), 2);
        assert!(errors.get_field_errors("c").is_empty());
        assert_eq!(errors.to_string(), "a: first\nb: second\na: third\n");
    }

    #[test]
    fn test_errors_to_json() {
        let errors: ValidationErrors = vec![
            ValidationError::new("ssn", "ssn must be a valid social security number")
                .with_constraint("isSsn"),
        ]
        .into();

        let json = errors.to_json();
        assert_eq!(json["errors"][0]["field"], "ssn");
        assert_eq!(json["errors"][0]["constraint"], "isSsn");
        assert!(json["errors"][0]["value"].is_null());
    }
}
