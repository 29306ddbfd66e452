// Declarative field rules loaded from JSON

use crate::{Kind, SchemaError, ValidationBuilder, ValidationErrors, ValidationRules};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Field name to built-in rules, as it appears in configuration:
///
/// ```
/// use branded_validation::{Kind, ValidationSchema};
///
/// let schema = ValidationSchema::from_json(r#"{
///     "email": ["email"],
///     "home": ["latitude"]
/// }"#).unwrap();
///
/// assert_eq!(schema.kinds("email"), Some(&[Kind::Email][..]));
/// ```
///
/// Unknown rule names and fields with an empty rule list fail to
/// deserialize, whether the schema is loaded alone or nested in a larger
/// document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Vec<Kind>>",
    into = "BTreeMap<String, Vec<Kind>>"
)]
pub struct ValidationSchema {
    fields: BTreeMap<String, Vec<Kind>>,
}

impl ValidationSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a schema and reject fields that list no rules.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let fields: BTreeMap<String, Vec<Kind>> = serde_json::from_str(json)?;
        let schema = Self::try_from(fields)?;

        branded_log::debug!(
            target: "branded::schema",
            "loaded validation schema with {} fields",
            schema.fields.len()
        );
        Ok(schema)
    }

    /// Add or replace the rules for a field
    pub fn field(mut self, name: impl Into<String>, kinds: impl IntoIterator<Item = Kind>) -> Self {
        self.fields.insert(name.into(), kinds.into_iter().collect());
        self
    }

    pub fn kinds(&self, field: &str) -> Option<&[Kind]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_builder(&self) -> ValidationBuilder {
        self.fields
            .iter()
            .fold(ValidationBuilder::new(), |builder, (field, kinds)| {
                let rules = kinds
                    .iter()
                    .fold(ValidationRules::for_field(field), |rules, kind| {
                        rules.require(*kind)
                    });
                builder.field(rules)
            })
    }

    /// Validate raw values. Fields missing from `data` are skipped.
    pub fn validate(&self, data: &HashMap<String, String>) -> Result<(), ValidationErrors> {
        self.to_builder().validate(data).map_err(ValidationErrors::from)
    }
}

impl TryFrom<BTreeMap<String, Vec<Kind>>> for ValidationSchema {
    type Error = SchemaError;

    fn try_from(fields: BTreeMap<String, Vec<Kind>>) -> Result<Self, Self::Error> {
        match fields.iter().find(|(_, kinds)| kinds.is_empty()) {
            Some((field, _)) => Err(SchemaError::EmptyField(field.clone())),
            None => Ok(Self { fields }),
        }
    }
}

impl From<ValidationSchema> for BTreeMap<String, Vec<Kind>> {
    fn from(schema: ValidationSchema) -> Self {
        schema.fields
    }
}
