// Built-in validators
//
// Character classes spell out `[0-9]` because `\d` in the regex crate is
// Unicode-aware. Whitespace is spelled out too: the regex crate's `\s` is
// Unicode `White_Space`, which includes U+0085 and leaves out U+FEFF.

use crate::Gender;
use crate::Kind;
use branded_log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern)
        .unwrap_or_else(|e| panic!("built-in pattern {:?} is invalid: {}", pattern, e))
}

/// Whitespace members, as the body of a character class.
const SPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Line terminators, as the body of a character class.
const LINE_END: &str = r"\n\r\x{2028}\x{2029}";

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"^[^{SPACE}@]+@[^{SPACE}@]+\.[^{SPACE}@]+$")));

// The second character after the scheme is any non-line-terminator.
static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"^(http|https)://[^{SPACE}/$.?#][^{LINE_END}][^{SPACE}]*$")));

static PHONE_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| compile(r"^\+?[1-9][0-9]{1,14}$"));

static DATE_REGEX: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$"));

static UUID_REGEX: Lazy<Regex> = Lazy::new(|| {
    compile(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
});

static CREDIT_CARD_REGEX: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"^(?:4[0-9]{12}(?:[0-9]{3})?",      // Visa
        r"|5[1-5][0-9]{14}",                 // Mastercard
        r"|3[47][0-9]{13}",                  // Amex
        r"|3(?:0[0-5]|[68][0-9])[0-9]{11}",  // Diners
        r"|6(?:011|5[0-9][0-9])[0-9]{12}",   // Discover
        r"|7[0-9]{15})$",
    ))
});

static POSTAL_CODE_REGEX: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]{5}(?:-[0-9]{4})?$"));

static HEX_COLOR_REGEX: Lazy<Regex> = Lazy::new(|| compile(r"^#[0-9A-Fa-f]{6}$"));

static IPV4_REGEX: Lazy<Regex> = Lazy::new(|| {
    let octet = r"(25[0-5]|2[0-4][0-9]|[0-1]?[0-9][0-9]?)";
    compile(&format!(r"^{o}\.{o}\.{o}\.{o}$", o = octet))
});

// Unanchored: a match anywhere in the input is accepted.
static IPV6_REGEX: Lazy<Regex> =
    Lazy::new(|| compile(r"([0-9a-fA-F]{1,4}:){7}([0-9a-fA-F]{1,4}|:)"));

static CURRENCY_REGEX: Lazy<Regex> = Lazy::new(|| compile(r"^\$?([0-9]+(\.[0-9]{2})?)$"));

static SSN_REGEX: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]{3}-[0-9]{2}-[0-9]{4}$"));

static DATE_TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]{1,3})?(?:Z|[+-][0-9]{2}:[0-9]{2})$",
    )
});

static COUNTRY_CODE_REGEX: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Z]{2}$"));

static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| compile(r"^[a-zA-Z0-9_]{3,16}$"));

// Shape only; the letter and digit requirements are checked separately.
static PASSWORD_REGEX: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Za-z0-9]{8,}$"));

static MAC_ADDRESS_REGEX: Lazy<Regex> =
    Lazy::new(|| compile(r"^([0-9A-Fa-f]{2}[:-]){5}([0-9A-Fa-f]{2})$"));

static LATITUDE_REGEX: Lazy<Regex> = Lazy::new(|| compile(r"^-?[0-9]{1,2}(?:\.[0-9]+)?$"));

static LONGITUDE_REGEX: Lazy<Regex> = Lazy::new(|| compile(r"^-?[0-9]{1,3}(?:\.[0-9]+)?$"));

static ISBN10_REGEX: Lazy<Regex> = Lazy::new(|| compile(r"^(?:[0-9][ |-]?){9}[0-9X]$"));

static ISBN13_REGEX: Lazy<Regex> = Lazy::new(|| compile(r"^(?:[0-9][ |-]?){13}$"));

static HEXADECIMAL_REGEX: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9A-Fa-f]+$"));

static BASE64_REGEX: Lazy<Regex> = Lazy::new(|| {
    compile(r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=)?$")
});

static TWITTER_HANDLE_REGEX: Lazy<Regex> = Lazy::new(|| compile(r"^@([A-Za-z0-9_]{1,15})$"));

static SLUG_REGEX: Lazy<Regex> = Lazy::new(|| compile(r"^[a-z0-9]+(?:-[a-z0-9]+)*$"));

/// Record a rejection. Only the input length is logged, never the input.
#[inline]
fn verdict(kind: Kind, value: &str, accepted: bool) -> bool {
    if !accepted {
        trace!(
            target: "branded::validation",
            "{} rule rejected input of {} bytes",
            kind,
            value.len()
        );
    }
    accepted
}

/// Force compilation of every pattern so the first real call does not pay
/// for it.
pub fn warm_up() {
    for regex in [
        &EMAIL_REGEX,
        &URL_REGEX,
        &PHONE_NUMBER_REGEX,
        &DATE_REGEX,
        &UUID_REGEX,
        &CREDIT_CARD_REGEX,
        &POSTAL_CODE_REGEX,
        &HEX_COLOR_REGEX,
        &IPV4_REGEX,
        &IPV6_REGEX,
        &CURRENCY_REGEX,
        &SSN_REGEX,
        &DATE_TIME_REGEX,
        &COUNTRY_CODE_REGEX,
        &USERNAME_REGEX,
        &PASSWORD_REGEX,
        &MAC_ADDRESS_REGEX,
        &LATITUDE_REGEX,
        &LONGITUDE_REGEX,
        &ISBN10_REGEX,
        &ISBN13_REGEX,
        &HEXADECIMAL_REGEX,
        &BASE64_REGEX,
        &TWITTER_HANDLE_REGEX,
        &SLUG_REGEX,
    ] {
        Lazy::force(regex);
    }
    branded_log::debug!(target: "branded::validation", "rule table compiled");
}

/// `local@domain.tld` shape with no whitespace anywhere.
pub fn is_email(value: &str) -> bool {
    verdict(Kind::Email, value, EMAIL_REGEX.is_match(value))
}

/// `http://` or `https://` followed by a non-empty, whitespace-free rest.
pub fn is_url(value: &str) -> bool {
    verdict(Kind::Url, value, URL_REGEX.is_match(value))
}

/// E.164-like: optional "+", leading 1-9, 2 to 15 digits in total.
pub fn is_phone_number(value: &str) -> bool {
    verdict(Kind::PhoneNumber, value, PHONE_NUMBER_REGEX.is_match(value))
}

/// `YYYY-MM-DD` digit grouping. No calendar check.
pub fn is_date_string(value: &str) -> bool {
    verdict(Kind::DateString, value, DATE_REGEX.is_match(value))
}

/// 8-4-4-4-12 hex groups, any case, any version.
pub fn is_uuid(value: &str) -> bool {
    verdict(Kind::Uuid, value, UUID_REGEX.is_match(value))
}

/// Known issuer prefixes and lengths. No Luhn checksum.
pub fn is_credit_card(value: &str) -> bool {
    verdict(Kind::CreditCard, value, CREDIT_CARD_REGEX.is_match(value))
}

/// US ZIP or ZIP+4.
pub fn is_postal_code(value: &str) -> bool {
    verdict(Kind::PostalCode, value, POSTAL_CODE_REGEX.is_match(value))
}

/// `#RRGGBB`. The 3-digit short form is rejected.
pub fn is_hex_color(value: &str) -> bool {
    verdict(Kind::HexColor, value, HEX_COLOR_REGEX.is_match(value))
}

/// Dotted quad with every octet in 0-255.
pub fn is_ipv4(value: &str) -> bool {
    verdict(Kind::Ipv4, value, IPV4_REGEX.is_match(value))
}

/// Loose IPv6 check: eight colon-separated hex groups found anywhere in the
/// input. Surrounding characters are tolerated.
pub fn is_ipv6(value: &str) -> bool {
    verdict(Kind::Ipv6, value, IPV6_REGEX.is_match(value))
}

/// Optional "$", digits, optional two-digit cents.
pub fn is_currency(value: &str) -> bool {
    verdict(Kind::Currency, value, CURRENCY_REGEX.is_match(value))
}

/// `###-##-####`.
pub fn is_ssn(value: &str) -> bool {
    verdict(Kind::Ssn, value, SSN_REGEX.is_match(value))
}

/// `YYYY-MM-DDTHH:MM:SS[.fff](Z|±HH:MM)`.
pub fn is_date_time(value: &str) -> bool {
    verdict(Kind::DateTime, value, DATE_TIME_REGEX.is_match(value))
}

/// Exact, case-sensitive membership in the [`Gender`] literals.
pub fn is_gender(value: &str) -> bool {
    verdict(
        Kind::Gender,
        value,
        Gender::ALL.iter().any(|gender| gender.as_str() == value),
    )
}

/// Two uppercase ASCII letters.
pub fn is_country_code(value: &str) -> bool {
    verdict(Kind::CountryCode, value, COUNTRY_CODE_REGEX.is_match(value))
}

/// 3 to 16 word characters.
pub fn is_username(value: &str) -> bool {
    verdict(Kind::Username, value, USERNAME_REGEX.is_match(value))
}

/// At least 8 ASCII letters or digits, with at least one of each.
pub fn is_password(value: &str) -> bool {
    let accepted = PASSWORD_REGEX.is_match(value)
        && value.bytes().any(|b| b.is_ascii_alphabetic())
        && value.bytes().any(|b| b.is_ascii_digit());
    verdict(Kind::Password, value, accepted)
}

/// Six hex pairs separated by ":" or "-".
pub fn is_mac_address(value: &str) -> bool {
    verdict(Kind::MacAddress, value, MAC_ADDRESS_REGEX.is_match(value))
}

/// Decimal degrees in [-90, 90].
pub fn is_latitude(value: &str) -> bool {
    verdict(
        Kind::Latitude,
        value,
        LATITUDE_REGEX.is_match(value) && within(value, 90.0),
    )
}

/// Decimal degrees in [-180, 180].
pub fn is_longitude(value: &str) -> bool {
    verdict(
        Kind::Longitude,
        value,
        LONGITUDE_REGEX.is_match(value) && within(value, 180.0),
    )
}

// The coordinate patterns only admit forms `f64` can parse.
fn within(value: &str, bound: f64) -> bool {
    value
        .parse::<f64>()
        .is_ok_and(|degrees| (-bound..=bound).contains(&degrees))
}

/// ISBN-10 or ISBN-13 shape. No checksum.
pub fn is_isbn(value: &str) -> bool {
    verdict(
        Kind::Isbn,
        value,
        ISBN10_REGEX.is_match(value) || ISBN13_REGEX.is_match(value),
    )
}

/// One or more hex digits.
pub fn is_hexadecimal(value: &str) -> bool {
    verdict(Kind::Hexadecimal, value, HEXADECIMAL_REGEX.is_match(value))
}

/// Padded standard base64. The empty string is not a value.
pub fn is_base64(value: &str) -> bool {
    verdict(
        Kind::Base64,
        value,
        !value.is_empty() && BASE64_REGEX.is_match(value),
    )
}

/// "@" and 1 to 15 word characters.
pub fn is_twitter_handle(value: &str) -> bool {
    verdict(Kind::TwitterHandle, value, TWITTER_HANDLE_REGEX.is_match(value))
}

/// Lowercase alphanumeric segments joined by single hyphens.
pub fn is_slug(value: &str) -> bool {
    verdict(Kind::Slug, value, SLUG_REGEX.is_match(value))
}
