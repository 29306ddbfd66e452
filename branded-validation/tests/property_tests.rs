//! Property-based tests for branded-validation.

use branded_validation::*;
use proptest::prelude::*;

fn any_kind() -> impl Strategy<Value = Kind> {
    proptest::sample::select(Kind::ALL.to_vec())
}

// ============================================================================
// TOTALITY AND IDEMPOTENCE: every rule returns, and returns the same answer
// ============================================================================

proptest! {
    #[test]
    fn rules_are_idempotent(kind in any_kind(), s in "\\PC{0,64}") {
        let first = kind.matches(&s);
        let second = kind.matches(&s);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn rules_never_panic_on_arbitrary_text(kind in any_kind(), s in ".*") {
        let _ = kind.matches(&s);
    }
}

// ============================================================================
// CONSTRUCTION: a branded value exists iff the rule accepts
// ============================================================================

proptest! {
    #[test]
    fn email_parse_agrees_with_predicate(s in "[a-z@. ]{0,20}") {
        prop_assert_eq!(Email::parse(s.as_str()).is_ok(), is_email(&s));
    }

    #[test]
    fn slug_parse_agrees_with_predicate(s in "[a-zA-Z0-9-]{0,12}") {
        prop_assert_eq!(s.parse::<Slug>().is_ok(), is_slug(&s));
    }

    #[test]
    fn check_agrees_with_matches(kind in any_kind(), s in "[ -~]{0,24}") {
        prop_assert_eq!(kind.check(&s, "field").is_ok(), kind.matches(&s));
    }
}

// ============================================================================
// GENERATED VALID INPUTS
// ============================================================================

proptest! {
    #[test]
    fn generated_uuids_accepted(s in "[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}") {
        prop_assert!(is_uuid(&s));
    }

    #[test]
    fn dotted_quads_in_range_accepted(a in 0u8..=255, b in 0u8..=255, c in 0u8..=255, d in 0u8..=255) {
        let ip = format!("{}.{}.{}.{}", a, b, c, d);
        prop_assert!(is_ipv4(&ip));
    }

    #[test]
    fn octets_above_255_rejected(a in 256u32..1000) {
        let value = format!("{}.0.0.1", a);
        prop_assert!(!is_ipv4(&value));
    }

    #[test]
    fn latitude_follows_range(whole in -99i32..=99, frac in 0u32..1000) {
        let value = format!("{}.{:03}", whole, frac);
        let parsed: f64 = value.parse().unwrap();
        prop_assert_eq!(is_latitude(&value), (-90.0..=90.0).contains(&parsed));
    }

    #[test]
    fn longitude_follows_range(whole in -999i32..=999, frac in 0u32..10) {
        let value = format!("{}.{}", whole, frac);
        let parsed: f64 = value.parse().unwrap();
        prop_assert_eq!(is_longitude(&value), (-180.0..=180.0).contains(&parsed));
    }

    #[test]
    fn passwords_need_letter_and_digit(s in "[A-Za-z0-9]{8,20}") {
        let expected = s.chars().any(|c| c.is_ascii_alphabetic())
            && s.chars().any(|c| c.is_ascii_digit());
        prop_assert_eq!(is_password(&s), expected);
    }
}
