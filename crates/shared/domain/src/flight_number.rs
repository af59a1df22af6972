//! Flight numbers: two uppercase letters followed by three or four digits (`AB123`, `XY1234`).

use crate::error::ParseError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// ASCII digits only; `\d` would also accept other Unicode decimal digits.
pub const FLIGHT_NUMBER_PATTERN: &str = r"^[A-Z]{2}[0-9]{3,4}$";

static FLIGHT_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FLIGHT_NUMBER_PATTERN).unwrap());

/// A validated flight number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FlightNumber(String);

impl FlightNumber {
    /// Parses and validates a flight number.
    ///
    /// # Errors
    /// Returns [`ParseError::FlightNumber`] if `raw` does not match [`FLIGHT_NUMBER_PATTERN`].
    pub fn parse(raw: impl Into<String>) -> Result<Self, ParseError> {
        let raw = raw.into();
        if FLIGHT_NUMBER_REGEX.is_match(&raw) {
            Ok(Self(raw))
        } else {
            Err(ParseError::FlightNumber { value: raw })
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two-letter airline designator.
    #[must_use]
    pub fn airline(&self) -> &str {
        &self.0[..2]
    }

    /// The numeric part, without the airline designator.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.0[2..]
    }
}

impl FromStr for FlightNumber {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FlightNumber {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for FlightNumber {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<FlightNumber> for String {
    fn from(number: FlightNumber) -> Self {
        number.0
    }
}

impl AsRef<str> for FlightNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for FlightNumber {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
