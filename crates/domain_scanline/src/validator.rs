//! Scanline validation
//!
//! Validation re-derives both check digits from the embedded input string
//! and compares them with the digits carried in the record. It never
//! re-assembles the record from invoice data.

use serde::Serialize;
use tracing::warn;

use crate::check_digit::{check_digit_1, check_digit_2};
use crate::error::ScanlineResult;
use crate::fingerprint::PolicyFingerprint;
use crate::scanline::Scanline;

/// Per-check outcome of validating a scanline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub check_digit_1_match: bool,
    pub check_digit_2_match: bool,
    /// Check digit #1 recomputed from the input string
    pub expected_check_digit_1: u8,
    /// Check digit #1 carried in the record
    pub found_check_digit_1: u8,
    pub expected_check_digit_2: u8,
    pub found_check_digit_2: u8,
    /// Whether the embedded policy number starts with the supplied
    /// fingerprint; `None` when no fingerprint was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint_match: Option<bool>,
}

impl ValidationReport {
    /// True when every performed check matched
    pub fn is_valid(&self) -> bool {
        self.check_digit_1_match
            && self.check_digit_2_match
            && self.fingerprint_match.unwrap_or(true)
    }
}

/// Checks received scanlines
pub struct ScanlineValidator;

impl ScanlineValidator {
    /// Validates the check digits of `candidate`
    ///
    /// # Errors
    ///
    /// - `InvalidLength` unless `candidate` is exactly 61 characters
    /// - `NonNumeric` if any character is not a decimal digit
    ///
    /// Check-digit mismatches are reported in the returned
    /// [`ValidationReport`], not as errors.
    pub fn validate(candidate: &str) -> ScanlineResult<ValidationReport> {
        Self::validate_for_policy(candidate, None)
    }

    /// Validates the check digits and, when given, the policy fingerprint
    pub fn validate_for_policy(
        candidate: &str,
        fingerprint: Option<&PolicyFingerprint>,
    ) -> ScanlineResult<ValidationReport> {
        let scanline = Scanline::parse(candidate)?;
        let input = scanline.input_string();

        let expected_1 = check_digit_1(&input);
        let expected_2 = check_digit_2(&input);
        let found_1 = scanline.check_digit_1();
        let found_2 = scanline.check_digit_2();

        let fingerprint_match =
            fingerprint.map(|fp| input.policy_number_full().starts_with(fp.as_str()));

        let report = ValidationReport {
            check_digit_1_match: expected_1 == found_1,
            check_digit_2_match: expected_2 == found_2,
            expected_check_digit_1: expected_1,
            found_check_digit_1: found_1,
            expected_check_digit_2: expected_2,
            found_check_digit_2: found_2,
            fingerprint_match,
        };

        if !report.is_valid() {
            warn!(
                bill_id = scanline.fields().bill_id,
                check_digit_1_match = report.check_digit_1_match,
                check_digit_2_match = report.check_digit_2_match,
                fingerprint_match = ?report.fingerprint_match,
                "Scanline failed validation"
            );
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanlineError;

    const VALID: &str = "0101922300100091100911115156840112312201312300005347000000000";

    fn with_digit(record: &str, offset: usize, digit: char) -> String {
        let mut changed = record.to_string();
        changed.replace_range(offset..offset + 1, &digit.to_string());
        changed
    }

    #[test]
    fn test_reference_record_is_valid() {
        let report = ScanlineValidator::validate(VALID).unwrap();
        assert!(report.check_digit_1_match);
        assert!(report.check_digit_2_match);
        assert_eq!(report.fingerprint_match, None);
        assert!(report.is_valid());
    }

    #[test]
    fn test_wrong_check_digit_1_reported_separately() {
        let report = ScanlineValidator::validate(&with_digit(VALID, 4, '8')).unwrap();
        assert!(!report.check_digit_1_match);
        assert!(report.check_digit_2_match);
        assert_eq!(report.expected_check_digit_1, 9);
        assert_eq!(report.found_check_digit_1, 8);
    }

    #[test]
    fn test_wrong_check_digit_2_reported_separately() {
        let report = ScanlineValidator::validate(&with_digit(VALID, 5, '3')).unwrap();
        assert!(report.check_digit_1_match);
        assert!(!report.check_digit_2_match);
    }

    #[test]
    fn test_fingerprint_comparison() {
        let known = PolicyFingerprint::derive("TC123ABC45").unwrap();
        let other = PolicyFingerprint::derive("TC999ZZZ99").unwrap();

        let report = ScanlineValidator::validate_for_policy(VALID, Some(&known)).unwrap();
        assert_eq!(report.fingerprint_match, Some(true));

        let report = ScanlineValidator::validate_for_policy(VALID, Some(&other)).unwrap();
        assert_eq!(report.fingerprint_match, Some(false));
        assert!(!report.is_valid());
    }

    #[test]
    fn test_length_and_digit_errors() {
        assert_eq!(
            ScanlineValidator::validate(&VALID[..60]),
            Err(ScanlineError::InvalidLength { expected: 61, actual: 60 })
        );
        assert_eq!(
            ScanlineValidator::validate(&with_digit(VALID, 10, 'X')),
            Err(ScanlineError::NonNumeric { position: 11, character: 'X' })
        );
    }
}
