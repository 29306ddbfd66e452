//! Fuzz target for the validator set.
//!
//! Every rule must return for any input, give the same answer twice, and
//! agree with branded construction.

#![no_main]

use arbitrary::Arbitrary;
use branded_validation::{Branded, Email, Gender, Kind, Latitude, Slug, Uuid};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    /// Index into the rule table
    kind: u8,
    value: String,
}

fn agrees<T: Branded>(value: &str) {
    assert_eq!(value.parse::<T>().is_ok(), T::is_valid(value));
}

fuzz_target!(|data: FuzzInput| {
    let kind = Kind::ALL[data.kind as usize % Kind::ALL.len()];

    let first = kind.matches(&data.value);
    assert_eq!(first, kind.matches(&data.value));
    assert_eq!(first, kind.check(&data.value, "fuzz").is_ok());

    if data.value.is_empty() {
        assert!(!first);
    }

    agrees::<Email>(&data.value);
    agrees::<Uuid>(&data.value);
    agrees::<Latitude>(&data.value);
    agrees::<Slug>(&data.value);
    agrees::<Gender>(&data.value);
});
