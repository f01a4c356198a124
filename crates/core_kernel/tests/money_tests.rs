//! Comprehensive unit tests for the Money module
//!
//! Tests cover money creation, minor-unit conversion, rounding,
//! currency handling, and edge cases.

use core_kernel::{Currency, Money, MoneyError};
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_from_minor_handles_jpy_no_decimals() {
        let m = Money::from_minor(10000, Currency::JPY);
        assert_eq!(m.amount(), dec!(10000));
    }

    #[test]
    fn test_zero_amount() {
        let m = Money::new(dec!(0), Currency::EUR);
        assert_eq!(m.amount(), dec!(0));
        assert!(!m.is_negative());
        assert_eq!(m.currency(), Currency::EUR);
    }

    #[test]
    fn test_negative_amount_creation() {
        let m = Money::new(dec!(-100.00), Currency::USD);
        assert!(m.is_negative());
    }

    #[test]
    fn test_negative_zero_is_not_negative() {
        let m = Money::new(dec!(-0.00), Currency::USD);
        assert!(!m.is_negative());
    }
}

mod minor_units {
    use super::*;

    #[test]
    fn test_rounds_half_to_even() {
        assert_eq!(Money::new(dec!(10.125), Currency::USD).to_minor_units(), Ok(1012));
        assert_eq!(Money::new(dec!(10.135), Currency::USD).to_minor_units(), Ok(1014));
    }

    #[test]
    fn test_zero_decimal_currency() {
        assert_eq!(Money::new(dec!(5347), Currency::JPY).to_minor_units(), Ok(5347));
        assert_eq!(Money::new(dec!(5347.5), Currency::JPY).to_minor_units(), Ok(5348));
    }

    #[test]
    fn test_overflow() {
        let m = Money::new(dec!(999999999999999999999), Currency::USD);
        assert_eq!(m.to_minor_units(), Err(MoneyError::Overflow));
    }
}

mod currency {
    use super::*;

    #[test]
    fn test_decimal_places() {
        assert_eq!(Currency::USD.decimal_places(), 2);
        assert_eq!(Currency::JPY.decimal_places(), 0);
    }

    #[test]
    fn test_minor_unit_factor() {
        assert_eq!(Currency::EUR.minor_unit_factor(), dec!(100));
        assert_eq!(Currency::JPY.minor_unit_factor(), dec!(1));
    }

    #[test]
    fn test_serde_uses_uppercase_codes() {
        let json = serde_json::to_string(&Currency::GBP).unwrap();
        assert_eq!(json, "\"GBP\"");
        let parsed: Currency = serde_json::from_str("\"CHF\"").unwrap();
        assert_eq!(parsed, Currency::CHF);
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::new(dec!(53.47), Currency::USD);
        let b = Money::new(dec!(46.53), Currency::USD);
        assert_eq!(a.checked_add(&b), Ok(Money::new(dec!(100.00), Currency::USD)));
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let usd = Money::new(dec!(1), Currency::USD);
        let cad = Money::new(dec!(1), Currency::CAD);
        assert_eq!(
            usd.checked_add(&cad),
            Err(MoneyError::CurrencyMismatch("USD".to_string(), "CAD".to_string()))
        );
    }
}

mod display {
    use super::*;

    #[test]
    fn test_display_uses_currency_precision() {
        assert_eq!(Money::new(dec!(53.4), Currency::USD).to_string(), "$ 53.40");
        assert_eq!(Money::new(dec!(5347), Currency::JPY).to_string(), "¥ 5347");
    }
}
