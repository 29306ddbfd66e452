// Gender enumeration

use crate::{Branded, Kind, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of accepted gender values.
///
/// Unlike the other branded types this one is a real enum: membership in
/// the four literals replaces pattern matching, and parsing is exact and
/// case-sensitive (`"Female"` is rejected).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    NonBinary,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 4] = [Gender::Male, Gender::Female, Gender::NonBinary, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::NonBinary => "non-binary",
            Gender::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|gender| gender.as_str() == s)
            .ok_or_else(|| Kind::Gender.error(s, Kind::Gender.name()))
    }
}

impl TryFrom<&str> for Gender {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Gender {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Branded for Gender {
    const KIND: Kind = Kind::Gender;

    fn as_str(&self) -> &str {
        Gender::as_str(self)
    }

    fn into_inner(self) -> String {
        Gender::as_str(&self).to_string()
    }
}
