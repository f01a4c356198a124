//! Pre-built Test Fixtures
//!
//! Provides the documented reference invoice and the exact strings it must
//! encode to. These values are fixed and predictable for unit tests.

use chrono::NaiveDate;
use core_kernel::{Currency, Money};
use domain_scanline::{Invoice, PolicySymbol};
use rust_decimal_macros::dec;

/// Fixture for the documented reference invoice
pub struct ReferenceFixtures;

impl ReferenceFixtures {
    /// Policy identifier of the reference invoice
    pub fn policy_identifier() -> &'static str {
        "TC123ABC45"
    }

    /// Fingerprint of [`ReferenceFixtures::policy_identifier`]
    pub fn fingerprint() -> &'static str {
        "11515684"
    }

    /// Expected 55-digit input string
    pub fn input_string() -> &'static str {
        "2300100091100911115156840112312201312300005347000000000"
    }

    /// Expected check digit #1
    pub fn check_digit_1() -> u8 {
        9
    }

    /// Expected check digit #2
    pub fn check_digit_2() -> u8 {
        2
    }

    /// Expected bill ID (term 1, installment 1)
    pub fn bill_id() -> &'static str {
        "0101"
    }

    /// Expected 61-digit scanline
    pub fn scanline() -> String {
        format!(
            "{}{}{}{}",
            Self::bill_id(),
            Self::check_digit_1(),
            Self::check_digit_2(),
            Self::input_string()
        )
    }

    /// The reference invoice itself
    pub fn invoice() -> Invoice {
        Invoice {
            invoice_date: DateFixtures::invoice_date(),
            policy_identifier: Self::policy_identifier().to_string(),
            policy_symbol: PolicySymbol::Standard,
            policy_effective_date: DateFixtures::policy_effective_date(),
            final_accept_date: DateFixtures::final_accept_date(),
            minimum_amount_due: MoneyFixtures::usd_amount_due(),
            policy_term_number: 1,
            installment_number: 1,
        }
    }
}

/// Fixture for date test data
pub struct DateFixtures;

impl DateFixtures {
    /// Reference invoice date (Jan 1, 2023, Julian 23001)
    pub fn invoice_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
    }

    /// Reference policy effective date (Dec 31, 2022)
    pub fn policy_effective_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 12, 31).unwrap()
    }

    /// Reference final accept date (Jan 31, 2023)
    pub fn final_accept_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, 31).unwrap()
    }

    /// Last day of a leap year, day 366
    pub fn leap_year_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    /// A date the default 2000..=2099 window cannot represent
    pub fn previous_century() -> NaiveDate {
        NaiveDate::from_ymd_opt(1999, 6, 30).unwrap()
    }
}

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Reference minimum amount due
    pub fn usd_amount_due() -> Money {
        Money::new(dec!(53.47), Currency::USD)
    }

    /// Largest amount that fits the 8-digit field
    pub fn usd_field_maximum() -> Money {
        Money::new(dec!(999999.99), Currency::USD)
    }

    /// One cent more than the field can hold
    pub fn usd_field_overflow() -> Money {
        Money::new(dec!(1000000.00), Currency::USD)
    }

    /// Negative amount, never encodable
    pub fn usd_refund() -> Money {
        Money::new(dec!(-50.00), Currency::USD)
    }

    /// A zero-decimal currency amount
    pub fn jpy_amount_due() -> Money {
        Money::new(dec!(5347), Currency::JPY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scanline_is_61_digits() {
        let scanline = ReferenceFixtures::scanline();
        assert_eq!(scanline.len(), 61);
        assert!(scanline.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_reference_dates_ordering() {
        assert!(DateFixtures::policy_effective_date() < DateFixtures::invoice_date());
        assert!(DateFixtures::invoice_date() < DateFixtures::final_accept_date());
    }
}
