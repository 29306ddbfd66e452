// Validation traits

use crate::{Kind, ValidationError};
use std::str::FromStr;

/// Trait for validatable types
pub trait Validate {
    /// Validate the value and return errors if any
    fn validate(&self) -> Result<(), Vec<ValidationError>>;
}

/// A string type that can only hold values accepted by one [`Kind`].
///
/// Implemented by every newtype in [`types`](crate::types) and by
/// [`Gender`](crate::Gender). Construction goes through [`FromStr`], which
/// runs the rule; there is no other way to obtain a value.
pub trait Branded: Sized + FromStr<Err = ValidationError> {
    /// The rule every value of this type has passed
    const KIND: Kind;

    /// Borrow the validated string
    fn as_str(&self) -> &str;

    /// Give back the validated string
    fn into_inner(self) -> String;

    /// Run the rule without constructing a value
    fn is_valid(value: &str) -> bool {
        Self::KIND.matches(value)
    }
}
