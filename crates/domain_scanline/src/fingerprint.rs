//! Policy fingerprinting
//!
//! A policy identifier is alphanumeric, but every scanline field must be
//! numeric. The fingerprint is a reproducible 8-digit surrogate:
//!
//! 1. drop the 2-character policy-symbol prefix
//! 2. MD5 the remaining serial, rendered as 32 lowercase hex characters
//! 3. read that hex string as a base-16 integer and render it in base 10
//! 4. keep the first 8 decimal digits
//!
//! The digest is exactly 128 bits, so `u128` holds it without loss, and its
//! big-endian bytes are the same integer the hex string spells out.

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use core_kernel::PolicyNumber;

use crate::error::{ScanlineError, ScanlineResult};

/// Number of digits in a fingerprint
pub const FINGERPRINT_WIDTH: usize = 8;

/// 8-digit numeric surrogate for a policy identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyFingerprint(String);

impl PolicyFingerprint {
    /// Derives the fingerprint from a raw policy identifier
    ///
    /// # Errors
    ///
    /// `MalformedPolicyId` if fewer than two characters follow the prefix or
    /// the identifier is not ASCII alphanumeric.
    pub fn derive(identifier: &str) -> ScanlineResult<Self> {
        let policy = PolicyNumber::parse(identifier).map_err(|e| {
            ScanlineError::MalformedPolicyId {
                identifier: identifier.to_string(),
                reason: e.to_string(),
            }
        })?;
        Self::of(&policy)
    }

    /// Derives the fingerprint from an already validated policy number
    pub fn of(policy: &PolicyNumber) -> ScanlineResult<Self> {
        if !policy.has_alphabetic_prefix() {
            warn!(
                policy = %policy,
                prefix = policy.prefix(),
                "Policy prefix is not alphabetic; dropping it anyway"
            );
        }

        let mut digest = [0u8; 16];
        digest.copy_from_slice(&Md5::digest(policy.serial().as_bytes()));
        // Big-endian bytes read as the same integer as the lowercase hex string.
        let value = u128::from_be_bytes(digest);

        let fingerprint = truncate_decimal(&value.to_string())?;
        debug!(
            policy = %policy,
            digest = %hex::encode(digest),
            fingerprint = %fingerprint,
            "Derived policy fingerprint"
        );
        Ok(fingerprint)
    }

    /// Parses an existing 8-digit fingerprint, e.g. one read back from a record
    pub fn parse(digits: &str) -> ScanlineResult<Self> {
        crate::error::ensure_digits(digits, FINGERPRINT_WIDTH)?;
        Ok(Self(digits.to_string()))
    }

    /// Returns the fingerprint digits
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PolicyFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn truncate_decimal(decimal: &str) -> ScanlineResult<PolicyFingerprint> {
    match decimal.get(..FINGERPRINT_WIDTH) {
        Some(prefix) => Ok(PolicyFingerprint(prefix.to_string())),
        None => Err(ScanlineError::FingerprintTruncation {
            decimal: decimal.to_string(),
            width: FINGERPRINT_WIDTH,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_fingerprint() {
        let fingerprint = PolicyFingerprint::derive("TC123ABC45").unwrap();
        assert_eq!(fingerprint.as_str(), "11515684");
    }

    #[test]
    fn test_prefix_is_ignored() {
        let a = PolicyFingerprint::derive("TC123ABC45").unwrap();
        let b = PolicyFingerprint::derive("XY123ABC45").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_serial_is_case_sensitive() {
        let upper = PolicyFingerprint::derive("TC123ABC45").unwrap();
        let lower = PolicyFingerprint::derive("TC123abc45").unwrap();
        assert_ne!(upper, lower);
    }

    #[test]
    fn test_too_short() {
        assert!(matches!(
            PolicyFingerprint::derive("TC1"),
            Err(ScanlineError::MalformedPolicyId { .. })
        ));
        assert!(matches!(
            PolicyFingerprint::derive(""),
            Err(ScanlineError::MalformedPolicyId { .. })
        ));
    }

    #[test]
    fn test_non_alphanumeric_rejected() {
        assert!(matches!(
            PolicyFingerprint::derive("TC 12345"),
            Err(ScanlineError::MalformedPolicyId { .. })
        ));
    }

    #[test]
    fn test_digest_integer_matches_hex_rendering() {
        let digest = Md5::digest(b"123ABC45");
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&digest);
        assert_eq!(
            u128::from_be_bytes(bytes),
            u128::from_str_radix(&hex::encode(digest), 16).unwrap()
        );
    }

    #[test]
    fn test_numeric_prefix_still_fingerprints() {
        let fingerprint = PolicyFingerprint::derive("12123ABC45").unwrap();
        assert_eq!(fingerprint.as_str(), "11515684");
    }

    #[test]
    fn test_truncation_of_short_decimal() {
        assert_eq!(
            truncate_decimal("1234567"),
            Err(ScanlineError::FingerprintTruncation {
                decimal: "1234567".to_string(),
                width: 8
            })
        );
        assert_eq!(truncate_decimal("123456789").unwrap().as_str(), "12345678");
    }

    #[test]
    fn test_parse() {
        assert!(PolicyFingerprint::parse("11515684").is_ok());
        assert!(PolicyFingerprint::parse("1151568").is_err());
        assert!(PolicyFingerprint::parse("1151568X").is_err());
    }
}
