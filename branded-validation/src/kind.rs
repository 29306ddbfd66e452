// The closed set of validation rules

use crate::ValidationError;
use crate::validators::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One rule of the validator set.
///
/// Every branded type names exactly one `Kind`, and [`Kind::matches`] is the
/// single acceptance test behind both the `is_*` predicates and the
/// branded constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Email,
    Url,
    PhoneNumber,
    DateString,
    Uuid,
    CreditCard,
    PostalCode,
    HexColor,
    Ipv4,
    Ipv6,
    Currency,
    Ssn,
    DateTime,
    Gender,
    CountryCode,
    Username,
    Password,
    MacAddress,
    Latitude,
    Longitude,
    Isbn,
    Hexadecimal,
    Base64,
    TwitterHandle,
    Slug,
}

impl Kind {
    /// Every rule, in declaration order
    pub const ALL: [Kind; 25] = [
        Kind::Email,
        Kind::Url,
        Kind::PhoneNumber,
        Kind::DateString,
        Kind::Uuid,
        Kind::CreditCard,
        Kind::PostalCode,
        Kind::HexColor,
        Kind::Ipv4,
        Kind::Ipv6,
        Kind::Currency,
        Kind::Ssn,
        Kind::DateTime,
        Kind::Gender,
        Kind::CountryCode,
        Kind::Username,
        Kind::Password,
        Kind::MacAddress,
        Kind::Latitude,
        Kind::Longitude,
        Kind::Isbn,
        Kind::Hexadecimal,
        Kind::Base64,
        Kind::TwitterHandle,
        Kind::Slug,
    ];

    /// Snake-case name, identical to the serde representation
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Email => "email",
            Kind::Url => "url",
            Kind::PhoneNumber => "phone_number",
            Kind::DateString => "date_string",
            Kind::Uuid => "uuid",
            Kind::CreditCard => "credit_card",
            Kind::PostalCode => "postal_code",
            Kind::HexColor => "hex_color",
            Kind::Ipv4 => "ipv4",
            Kind::Ipv6 => "ipv6",
            Kind::Currency => "currency",
            Kind::Ssn => "ssn",
            Kind::DateTime => "date_time",
            Kind::Gender => "gender",
            Kind::CountryCode => "country_code",
            Kind::Username => "username",
            Kind::Password => "password",
            Kind::MacAddress => "mac_address",
            Kind::Latitude => "latitude",
            Kind::Longitude => "longitude",
            Kind::Isbn => "isbn",
            Kind::Hexadecimal => "hexadecimal",
            Kind::Base64 => "base64",
            Kind::TwitterHandle => "twitter_handle",
            Kind::Slug => "slug",
        }
    }

    /// Constraint recorded on [`ValidationError`]s
    pub fn constraint(&self) -> &'static str {
        match self {
            Kind::Email => "isEmail",
            Kind::Url => "isUrl",
            Kind::PhoneNumber => "isPhoneNumber",
            Kind::DateString => "isDateString",
            Kind::Uuid => "isUuid",
            Kind::CreditCard => "isCreditCard",
            Kind::PostalCode => "isPostalCode",
            Kind::HexColor => "isHexColor",
            Kind::Ipv4 => "isIpv4",
            Kind::Ipv6 => "isIpv6",
            Kind::Currency => "isCurrency",
            Kind::Ssn => "isSsn",
            Kind::DateTime => "isDateTime",
            Kind::Gender => "isGender",
            Kind::CountryCode => "isCountryCode",
            Kind::Username => "isUsername",
            Kind::Password => "isPassword",
            Kind::MacAddress => "isMacAddress",
            Kind::Latitude => "isLatitude",
            Kind::Longitude => "isLongitude",
            Kind::Isbn => "isIsbn",
            Kind::Hexadecimal => "isHexadecimal",
            Kind::Base64 => "isBase64",
            Kind::TwitterHandle => "isTwitterHandle",
            Kind::Slug => "isSlug",
        }
    }

    /// Human-readable noun used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            Kind::Email => "email address",
            Kind::Url => "URL",
            Kind::PhoneNumber => "phone number",
            Kind::DateString => "date",
            Kind::Uuid => "UUID",
            Kind::CreditCard => "credit card number",
            Kind::PostalCode => "postal code",
            Kind::HexColor => "hex color",
            Kind::Ipv4 => "IPv4 address",
            Kind::Ipv6 => "IPv6 address",
            Kind::Currency => "currency amount",
            Kind::Ssn => "social security number",
            Kind::DateTime => "date-time",
            Kind::Gender => "gender",
            Kind::CountryCode => "country code",
            Kind::Username => "username",
            Kind::Password => "password",
            Kind::MacAddress => "MAC address",
            Kind::Latitude => "latitude",
            Kind::Longitude => "longitude",
            Kind::Isbn => "ISBN",
            Kind::Hexadecimal => "hexadecimal string",
            Kind::Base64 => "base64 string",
            Kind::TwitterHandle => "Twitter handle",
            Kind::Slug => "slug",
        }
    }

    /// Rejected values of these kinds are never copied into errors or logs.
    pub fn is_sensitive(&self) -> bool {
        matches!(self, Kind::Password | Kind::Ssn | Kind::CreditCard)
    }

    /// Run the acceptance test for this rule.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Kind::Email => is_email(value),
            Kind::Url => is_url(value),
            Kind::PhoneNumber => is_phone_number(value),
            Kind::DateString => is_date_string(value),
            Kind::Uuid => is_uuid(value),
            Kind::CreditCard => is_credit_card(value),
            Kind::PostalCode => is_postal_code(value),
            Kind::HexColor => is_hex_color(value),
            Kind::Ipv4 => is_ipv4(value),
            Kind::Ipv6 => is_ipv6(value),
            Kind::Currency => is_currency(value),
            Kind::Ssn => is_ssn(value),
            Kind::DateTime => is_date_time(value),
            Kind::Gender => is_gender(value),
            Kind::CountryCode => is_country_code(value),
            Kind::Username => is_username(value),
            Kind::Password => is_password(value),
            Kind::MacAddress => is_mac_address(value),
            Kind::Latitude => is_latitude(value),
            Kind::Longitude => is_longitude(value),
            Kind::Isbn => is_isbn(value),
            Kind::Hexadecimal => is_hexadecimal(value),
            Kind::Base64 => is_base64(value),
            Kind::TwitterHandle => is_twitter_handle(value),
            Kind::Slug => is_slug(value),
        }
    }

    /// Validate `value` as `field`, in the shape used by
    /// [`ValidationRules`](crate::ValidationRules).
    pub fn check(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        if self.matches(value) {
            Ok(())
        } else {
            Err(self.error(value, field))
        }
    }

    pub(crate) fn error(&self, value: &str, field: &str) -> ValidationError {
        let error = ValidationError::new(
            field,
            format!("{} must be a valid {}", field, self.label()),
        )
        .with_constraint(self.constraint());

        if self.is_sensitive() {
            error
        } else {
            error.with_value(value)
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| {
                ValidationError::new("kind", format!("unknown validation kind: {}", s))
                    .with_constraint("isKind")
                    .with_value(s)
            })
    }
}
