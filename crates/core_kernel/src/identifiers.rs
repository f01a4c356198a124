//! Strongly-typed business identifiers
//!
//! Policy identifiers arrive as free text from upstream billing systems.
//! Wrapping them in a validated newtype keeps malformed values from ever
//! reaching the encoders.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing an identifier
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("identifier is empty")]
    Empty,

    #[error("identifier contains non-alphanumeric character {0:?}")]
    InvalidCharacter(char),

    #[error("identifier has {actual} characters, at least {minimum} required")]
    TooShort { actual: usize, minimum: usize },
}

/// An alphanumeric policy identifier such as `TC123ABC45`
///
/// The first [`PolicyNumber::PREFIX_LEN`] characters are the policy-symbol
/// prefix; the remainder is the policy serial.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PolicyNumber(String);

impl PolicyNumber {
    /// Length of the policy-symbol prefix
    pub const PREFIX_LEN: usize = 2;

    /// Minimum length of the serial that follows the prefix
    pub const MIN_SERIAL_LEN: usize = 2;

    /// Parses and validates a raw policy identifier
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        if raw.is_empty() {
            return Err(IdentifierError::Empty);
        }
        if let Some(bad) = raw.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(IdentifierError::InvalidCharacter(bad));
        }
        let minimum = Self::PREFIX_LEN + Self::MIN_SERIAL_LEN;
        if raw.len() < minimum {
            return Err(IdentifierError::TooShort {
                actual: raw.len(),
                minimum,
            });
        }
        Ok(Self(raw.to_string()))
    }

    /// Returns the full identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the policy-symbol prefix
    pub fn prefix(&self) -> &str {
        // ASCII-only, so byte slicing is on char boundaries
        &self.0[..Self::PREFIX_LEN]
    }

    /// Returns the serial that follows the prefix
    pub fn serial(&self) -> &str {
        &self.0[Self::PREFIX_LEN..]
    }

    /// True when the prefix is purely alphabetic, the conventional shape
    pub fn has_alphabetic_prefix(&self) -> bool {
        self.prefix().chars().all(|c| c.is_ascii_alphabetic())
    }
}

impl fmt::Display for PolicyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PolicyNumber {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PolicyNumber {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PolicyNumber> for String {
    fn from(id: PolicyNumber) -> String {
        id.0
    }
}
