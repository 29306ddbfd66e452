// branded - String types that can only hold validated values
//
// The facade re-exports the member crates behind cargo features so callers
// depend on a single package.

#[cfg(feature = "validation")]
pub use branded_validation::*;

#[cfg(feature = "validation")]
pub use branded_validation as validation;

#[cfg(feature = "log")]
pub use branded_log as log;

// Prelude for common imports
#[cfg(feature = "validation")]
pub mod prelude {
    pub use crate::{
        Base64, Branded, CountryCode, CreditCard, Currency, DateString, DateTime, Email, Gender,
        HexColor, Hexadecimal, Ipv4, Ipv6, Isbn, Kind, Latitude, Longitude, MacAddress, Password,
        PhoneNumber, PostalCode, Slug, Ssn, TwitterHandle, Url, Username, Uuid, Validate,
        ValidationError, ValidationErrors,
    };
}
