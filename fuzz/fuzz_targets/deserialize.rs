//! Fuzz target for deserializing branded types from JSON.
//!
//! Arbitrary bytes are fed to serde_json; whatever deserializes must pass
//! its rule.

#![no_main]

use branded_validation::{Branded, Email, Ipv4, Password, Url};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(email) = serde_json::from_slice::<Email>(data) {
        assert!(Email::is_valid(email.as_str()));
    }
    if let Ok(url) = serde_json::from_slice::<Url>(data) {
        assert!(Url::is_valid(url.as_str()));
    }
    if let Ok(ip) = serde_json::from_slice::<Ipv4>(data) {
        assert!(Ipv4::is_valid(ip.as_str()));
    }
    if let Ok(password) = serde_json::from_slice::<Password>(data) {
        assert!(Password::is_valid(password.as_str()));
    }
});
