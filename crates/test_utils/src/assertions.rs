//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for scanline types that give
//! more meaningful failure messages than standard assertions.

use domain_scanline::{ScanlineField, ScanlineFields, ValidationReport};

/// Asserts that `value` is exactly `len` ASCII digits
pub fn assert_all_digits(value: &str, len: usize) {
    assert_eq!(
        value.len(),
        len,
        "Expected {} characters, got {}: {:?}",
        len,
        value.len(),
        value
    );
    if let Some((index, c)) = value.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        panic!("Non-digit {:?} at offset {} in {:?}", c, index, value);
    }
}

/// Asserts that both check digits of a report matched
pub fn assert_check_digits_match(report: &ValidationReport) {
    assert!(
        report.check_digit_1_match && report.check_digit_2_match,
        "Check digit mismatch: #1 expected {} found {}, #2 expected {} found {}",
        report.expected_check_digit_1,
        report.found_check_digit_1,
        report.expected_check_digit_2,
        report.found_check_digit_2
    );
}

/// Asserts that a scanline carries the fixed constant fields
pub fn assert_constant_fields(record: &str) {
    let fields = match ScanlineFields::parse(record) {
        Ok(fields) => fields,
        Err(e) => panic!("Not a scanline: {:?} ({})", record, e),
    };

    let expected = [
        (ScanlineField::LockboxNumber, fields.lockbox_number, "000"),
        (ScanlineField::CompanyNumber, fields.company_number, "91"),
        (ScanlineField::Lob, fields.lob, "1"),
        (ScanlineField::LocationNumber, fields.location_number, "00"),
        (ScanlineField::Lobp, fields.lobp, "9"),
        (ScanlineField::CurrentBalance, fields.current_balance, "00000000"),
        (ScanlineField::StateCode, fields.state_code, "0"),
    ];

    for (field, actual, wanted) in expected {
        assert_eq!(
            actual,
            wanted,
            "{} is {:?}, expected {:?}",
            field.name(),
            actual,
            wanted
        );
    }
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that an error matches a specific variant
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Ok(value) => panic!("Expected Err matching {}, got Ok({:?})", stringify!($pattern), value),
            Err(ref e) => {
                assert!(
                    matches!(e, $pattern),
                    "Error {:?} does not match pattern {}",
                    e,
                    stringify!($pattern)
                );
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::ReferenceFixtures;

    #[test]
    fn test_assert_all_digits_passes() {
        assert_all_digits(ReferenceFixtures::input_string(), 55);
    }

    #[test]
    #[should_panic(expected = "Non-digit")]
    fn test_assert_all_digits_rejects_letters() {
        assert_all_digits("12A4", 4);
    }

    #[test]
    #[should_panic(expected = "Expected 5 characters")]
    fn test_assert_all_digits_rejects_length() {
        assert_all_digits("1234", 5);
    }

    #[test]
    fn test_assert_constant_fields_on_reference() {
        assert_constant_fields(&ReferenceFixtures::scanline());
    }
}
