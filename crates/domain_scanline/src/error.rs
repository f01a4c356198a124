//! Scanline domain errors

use core_kernel::{Money, MoneyError};
use thiserror::Error;

/// Errors that can occur while encoding or validating a scanline
///
/// Every error is local to the invoice or record being processed.
/// A check-digit mismatch is not an error; see [`crate::ValidationReport`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScanlineError {
    /// Policy identifier too short or not usable as hash input
    #[error("Malformed policy identifier {identifier:?}: {reason}")]
    MalformedPolicyId { identifier: String, reason: String },

    /// Term or installment number outside 1..=99
    #[error("{field} {value} does not fit the two-digit range 1..=99")]
    TermOverflow { field: &'static str, value: u32 },

    /// Amount needs more than eight digits of minor units
    #[error("Amount {amount} exceeds the {width}-digit minor-unit field")]
    AmountOverflow { amount: Money, width: usize },

    /// Negative amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Arithmetic failure in the money layer
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// Date outside the century window or not a calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Decimal rendering of the digest is shorter than the fingerprint
    #[error("Fingerprint source {decimal:?} has fewer than {width} digits")]
    FingerprintTruncation { decimal: String, width: usize },

    /// A component does not match its declared width
    #[error("Field {field} has width {actual}, expected {expected}")]
    AssemblyLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Record is not the expected length
    #[error("Expected {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Record contains a character that is not a decimal digit
    #[error("Non-numeric character {character:?} at position {position}")]
    NonNumeric { position: usize, character: char },
}

/// Checks that `value` is exactly `expected` ASCII digits
///
/// Positions in the returned error are 1-indexed.
pub(crate) fn ensure_digits(value: &str, expected: usize) -> Result<(), ScanlineError> {
    let actual = value.chars().count();
    if actual != expected {
        return Err(ScanlineError::InvalidLength { expected, actual });
    }
    match value.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        Some((index, character)) => Err(ScanlineError::NonNumeric {
            position: index + 1,
            character,
        }),
        None => Ok(()),
    }
}

/// Result type for scanline operations
pub type ScanlineResult<T> = Result<T, ScanlineError>;
