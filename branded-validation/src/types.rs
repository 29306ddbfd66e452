//! Branded string types.
//!
//! Each type wraps a `String` that has passed the matching [`Kind`] rule.
//! The field is private, so the only ways in are `parse`, [`FromStr`],
//! `TryFrom` and `Deserialize`, all of which run the rule first.
//!
//! ```
//! use branded_validation::{Email, Slug};
//!
//! let email = Email::parse("user@example.com").unwrap();
//! assert_eq!(email.as_str(), "user@example.com");
//!
//! assert!("Hello-World".parse::<Slug>().is_err());
//! ```

use crate::{Branded, Kind, ValidationError};
use branded_log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

fn brand(kind: Kind, value: String) -> Result<String, ValidationError> {
    if kind.matches(&value) {
        Ok(value)
    } else {
        debug!(target: "branded::types", "refused to construct {} value", kind);
        Err(kind.error(&value, kind.name()))
    }
}

macro_rules! branded {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        branded!(@define $(#[$meta])* $name => $kind);

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }
    };

    ($(#[$meta:meta])* $name:ident => $kind:ident, redacted) => {
        branded!(@define $(#[$meta])* $name => $kind);

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&"<redacted>").finish()
            }
        }
    };

    (@define $(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Validate `value` and wrap it.
            pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
                brand(Kind::$kind, value.into()).map(Self)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Branded for $name {
            const KIND: Kind = Kind::$kind;

            fn as_str(&self) -> &str {
                &self.0
            }

            fn into_inner(self) -> String {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ValidationError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Self::parse(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

branded! {
    /// An email address in `local@domain.tld` shape.
    Email => Email
}

branded! {
    /// An `http` or `https` URL.
    Url => Url
}

branded! {
    /// An E.164-like phone number.
    PhoneNumber => PhoneNumber
}

branded! {
    /// A `YYYY-MM-DD` string. Not checked against the calendar.
    DateString => DateString
}

branded! {
    /// A hyphenated UUID of any version.
    Uuid => Uuid
}

branded! {
    /// A card number with a known issuer prefix and length.
    CreditCard => CreditCard, redacted
}

branded! {
    /// A US ZIP or ZIP+4 code.
    PostalCode => PostalCode
}

branded! {
    /// A `#RRGGBB` color.
    HexColor => HexColor
}

branded! {
    Ipv4 => Ipv4
}

branded! {
    /// Text containing an eight-group IPv6 address.
    Ipv6 => Ipv6
}

branded! {
    /// A dollar amount such as `$10.99`.
    Currency => Currency
}

branded! {
    /// A US social security number, `###-##-####`.
    Ssn => Ssn, redacted
}

branded! {
    /// An ISO-8601 date-time with a `Z` or `±HH:MM` offset.
    DateTime => DateTime
}

branded! {
    /// A two-letter uppercase country code.
    CountryCode => CountryCode
}

branded! {
    Username => Username
}

branded! {
    /// An alphanumeric password with at least one letter and one digit.
    Password => Password, redacted
}

branded! {
    MacAddress => MacAddress
}

branded! {
    /// Decimal degrees in [-90, 90].
    Latitude => Latitude
}

branded! {
    /// Decimal degrees in [-180, 180].
    Longitude => Longitude
}

branded! {
    /// An ISBN-10 or ISBN-13 shaped string. No checksum.
    Isbn => Isbn
}

branded! {
    Hexadecimal => Hexadecimal
}

branded! {
    /// Padded standard base64.
    Base64 => Base64
}

branded! {
    /// `@` plus up to 15 word characters.
    TwitterHandle => TwitterHandle
}

branded! {
    /// A lowercase, hyphen-separated URL slug.
    Slug => Slug
}

impl Latitude {
    /// The coordinate as a number.
    pub fn degrees(&self) -> f64 {
        // validated on construction, so this always parses
        self.0.parse().unwrap_or_default()
    }
}

impl Longitude {
    /// The coordinate as a number.
    pub fn degrees(&self) -> f64 {
        self.0.parse().unwrap_or_default()
    }
}
