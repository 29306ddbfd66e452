//! Branded string types and the validators behind them
//!
//! Every supported format (email, URL, UUID, credit card, IPv4/IPv6, ...)
//! comes as a predicate that never fails and a newtype that can only be
//! built from a string the predicate accepts.
//!
//! # Examples
//!
//! ## Predicates
//!
//! ```
//! use branded_validation::{is_email, is_latitude, is_slug};
//!
//! assert!(is_email("user@example.com"));
//! assert!(!is_email("userexample.com"));
//! assert!(is_latitude("-90"));
//! assert!(!is_latitude("90.1"));
//! assert!(!is_slug("hello--world"));
//! ```
//!
//! ## Branded Types
//!
//! ```
//! use branded_validation::{Email, Gender, Uuid};
//!
//! fn notify(to: &Email) -> String {
//!     format!("sending to {}", to)
//! }
//!
//! let email: Email = "user@example.com".parse().unwrap();
//! assert_eq!(notify(&email), "sending to user@example.com");
//!
//! assert!(Uuid::parse("123e4567-e89b-12d3-a456-42661417400").is_err());
//! assert_eq!("non-binary".parse::<Gender>().unwrap(), Gender::NonBinary);
//! ```
//!
//! ## Struct Validation
//!
//! ```
//! use branded_validation::{Kind, Validate, ValidationError};
//!
//! struct SignUp {
//!     username: String,
//!     password: String,
//! }
//!
//! impl Validate for SignUp {
//!     fn validate(&self) -> Result<(), Vec<ValidationError>> {
//!         let errors: Vec<_> = [
//!             Kind::Username.check(&self.username, "username"),
//!             Kind::Password.check(&self.password, "password"),
//!         ]
//!         .into_iter()
//!         .filter_map(Result::err)
//!         .collect();
//!
//!         if errors.is_empty() { Ok(()) } else { Err(errors) }
//!     }
//! }
//!
//! let input = SignUp {
//!     username: "john_doe".to_string(),
//!     password: "abcdefgh".to_string(),
//! };
//! let errors = input.validate().unwrap_err();
//! assert_eq!(errors[0].field, "password");
//! ```
//!
//! ## Field Rules
//!
//! ```
//! use branded_validation::{Kind, ValidationRules};
//!
//! let rules = ValidationRules::for_field("mac")
//!     .require(Kind::MacAddress);
//!
//! assert!(rules.validate("00:1A:2B:3C:4D:5E").is_ok());
//! ```

mod errors;
mod gender;
mod kind;
mod rules;
mod schema;
mod traits;
pub mod types;
mod validators;

pub use errors::*;
pub use gender::Gender;
pub use kind::Kind;
pub use rules::*;
pub use schema::ValidationSchema;
pub use traits::*;
pub use types::*;
pub use validators::*;
