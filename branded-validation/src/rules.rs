// Validation rules builder

use crate::{Kind, ValidationError};
use std::collections::HashMap;
use std::sync::Arc;

type ValidatorFn = Arc<dyn Fn(&str, &str) -> Result<(), ValidationError> + Send + Sync>;

/// Rules applied to one named field.
///
/// Every rule runs; failures are collected rather than short-circuited.
#[derive(Clone)]
pub struct ValidationRules {
    validators: Vec<ValidatorFn>,
    kinds: Vec<Kind>,
    field: String,
}

impl ValidationRules {
    /// Create new validation rules for a field
    pub fn for_field(field: impl Into<String>) -> Self {
        Self {
            validators: Vec::new(),
            kinds: Vec::new(),
            field: field.into(),
        }
    }

    /// Require the value to pass a built-in rule
    pub fn require(mut self, kind: Kind) -> Self {
        self.kinds.push(kind);
        self.add(move |value, field| kind.check(value, field))
    }

    /// Add a custom validator function
    #[allow(clippy::should_implement_trait)]
    pub fn add<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str, &str) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.validators.push(Arc::new(validator));
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Built-in rules added through [`require`](Self::require)
    pub fn kinds(&self) -> &[Kind] {
        &self.kinds
    }

    /// Validate a value against all rules
    pub fn validate(&self, value: &str) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<_> = self
            .validators
            .iter()
            .filter_map(|validator| validator(value, &self.field).err())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl std::fmt::Debug for ValidationRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationRules")
            .field("field", &self.field)
            .field("kinds", &self.kinds)
            .field("validators", &self.validators.len())
            .finish()
    }
}

/// Rules for a set of fields, checked against a map of raw values.
#[derive(Debug, Clone, Default)]
pub struct ValidationBuilder {
    rules: Vec<ValidationRules>,
}

impl ValidationBuilder {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add rules for a field
    pub fn field(mut self, rules: ValidationRules) -> Self {
        self.rules.push(rules);
        self
    }

    pub fn rules(&self) -> &[ValidationRules] {
        &self.rules
    }

    /// Validate all fields. Fields absent from `data` are skipped.
    pub fn validate(&self, data: &HashMap<String, String>) -> Result<(), Vec<ValidationError>> {
        let mut all_errors = Vec::new();

        for rule in &self.rules {
            if let Some(value) = data.get(&rule.field) {
                if let Err(mut errors) = rule.validate(value) {
                    all_errors.append(&mut errors);
                }
            }
        }

        if all_errors.is_empty() {
            Ok(())
        } else {
            Err(all_errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_rules() {
        let rules = ValidationRules::for_field("contact").require(Kind::Email);

        assert!(rules.validate("test@example.com").is_ok());
        assert!(rules.validate("invalid").is_err());
        assert!(rules.validate("").is_err());
        assert_eq!(rules.kinds(), &[Kind::Email]);
    }

    #[test]
    fn test_all_failures_collected() {
        let rules = ValidationRules::for_field("token")
            .require(Kind::Hexadecimal)
            .require(Kind::Base64)
            .add(|value, field| {
                if value.len() > 4 {
                    Err(ValidationError::new(field, "token is too long"))
                } else {
                    Ok(())
                }
            });

        // Both hex and base64, short enough
        assert!(rules.validate("abcd").is_ok());

        let errors = rules.validate("zz!zzz").unwrap_err();
        let constraints: Vec<_> = errors.iter().map(|e| e.constraint.as_str()).collect();
        assert_eq!(constraints, vec!["isHexadecimal", "isBase64", "custom"]);
        assert!(errors.iter().all(|e| e.field == "token"));
    }

    #[test]
    fn test_validation_builder() {
        let mut data = HashMap::new();
        data.insert("email".to_string(), "john@example.com".to_string());
        data.insert("country".to_string(), "us".to_string());

        let builder = ValidationBuilder::new()
            .field(ValidationRules::for_field("email").require(Kind::Email))
            .field(ValidationRules::for_field("country").require(Kind::CountryCode))
            .field(ValidationRules::for_field("zip").require(Kind::PostalCode));

        let errors = builder.validate(&data).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "country");

        data.insert("country".to_string(), "US".to_string());
        assert!(builder.validate(&data).is_ok());
    }
}
