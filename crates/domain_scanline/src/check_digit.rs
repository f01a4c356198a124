//! Check digit algorithms
//!
//! Check digit #1 is a plain digit sum over the whole input string, less the
//! trailing digit of the Policy Number Full field.
//!
//! Check digit #2 is a Luhn-style weighted sum over the 32-digit window that
//! runs from the policy symbol through the minimum amount due. Digits at odd
//! (0-based) positions are weighted as `3d - 1` and folded to the sum of
//! their first and last decimal digit, except that a zero at an odd position
//! is added unweighted. That exemption is part of the format and must not be
//! "corrected" to standard Luhn behaviour.

use crate::error::{ensure_digits, ScanlineResult};
use crate::input_string::InputString;

/// Computes check digit #1
pub fn check_digit_1(input: &InputString) -> u8 {
    let total: i64 = input.digits().map(i64::from).sum();
    let trailing = input
        .policy_number_full()
        .bytes()
        .last()
        .map(|b| i64::from(b - b'0'))
        .unwrap_or(0);

    (total - trailing).rem_euclid(10) as u8
}

/// Computes check digit #2 from the input string's weighted window
pub fn check_digit_2(input: &InputString) -> u8 {
    weighted_digit_sum(input.check_digit_2_window().bytes().map(|b| u32::from(b - b'0')))
}

/// Computes check digit #2 over an arbitrary digit window
///
/// # Errors
///
/// `NonNumeric` if `window` contains anything other than ASCII digits.
pub fn check_digit_2_for_window(window: &str) -> ScanlineResult<u8> {
    ensure_digits(window, window.chars().count())?;
    Ok(weighted_digit_sum(window.bytes().map(|b| u32::from(b - b'0'))))
}

fn weighted_digit_sum(digits: impl Iterator<Item = u32>) -> u8 {
    let total: u32 = digits
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 1 && d > 0 {
                fold_first_and_last(d * 3 - 1)
            } else {
                d
            }
        })
        .sum();

    (total % 10) as u8
}

/// Sum of the first and last decimal digit; a single digit counts twice
fn fold_first_and_last(value: u32) -> u32 {
    let mut first = value;
    while first >= 10 {
        first /= 10;
    }
    first + value % 10
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: &str = "2300100091100911115156840112312201312300005347000000000";

    #[test]
    fn test_reference_check_digits() {
        let input = InputString::parse(REFERENCE).unwrap();
        assert_eq!(check_digit_1(&input), 9);
        assert_eq!(check_digit_2(&input), 2);
    }

    #[test]
    fn test_fold_first_and_last() {
        assert_eq!(fold_first_and_last(2), 4);
        assert_eq!(fold_first_and_last(8), 16);
        assert_eq!(fold_first_and_last(11), 2);
        assert_eq!(fold_first_and_last(26), 8);
    }

    #[test]
    fn test_zero_at_odd_position_is_not_weighted() {
        // The odd-position zero adds 0, not a folded 3*0 - 1.
        assert_eq!(check_digit_2_for_window("50").unwrap(), 5);
        // Odd-position 1 becomes 2 -> 2 + 2 = 4, so "51" sums to 9.
        assert_eq!(check_digit_2_for_window("51").unwrap(), 9);
        assert_eq!(check_digit_2_for_window("0505").unwrap(), 0);
    }

    #[test]
    fn test_even_positions_add_plainly() {
        assert_eq!(check_digit_2_for_window("9").unwrap(), 9);
        assert_eq!(check_digit_2_for_window("909").unwrap(), 8);
    }

    #[test]
    fn test_window_rejects_letters() {
        assert!(check_digit_2_for_window("12A4").is_err());
    }

    #[test]
    fn test_check_digit_1_subtracts_trailing_policy_digit() {
        // Digit sum 9, trailing policy digit 9
        let mut digits = "0".repeat(55);
        digits.replace_range(25..26, "9");
        let input = InputString::parse(&digits).unwrap();
        assert_eq!(check_digit_1(&input), 0);
    }
}
