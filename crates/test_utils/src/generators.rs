//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating invoices that respect the
//! encoder's input constraints: years inside 2000..=2099, amounts inside
//! the 8-digit field, term and installment inside 1..=99.

use chrono::{Duration, NaiveDate};
use core_kernel::{Currency, Money};
use domain_scanline::{Invoice, PolicySymbol};
use proptest::prelude::*;

/// Strategy for currencies the encoder accepts
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::JPY),
        Just(Currency::CHF),
        Just(Currency::CAD),
    ]
}

/// Strategy for amounts that fit the 8-digit minor-unit field
pub fn encodable_money_strategy() -> impl Strategy<Value = Money> {
    (0i64..=99_999_999i64, currency_strategy())
        .prop_map(|(minor, currency)| Money::from_minor(minor, currency))
}

/// Strategy for any date in 2000..=2099
pub fn window_date_strategy() -> impl Strategy<Value = NaiveDate> {
    let first = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let last = NaiveDate::from_ymd_opt(2099, 12, 31).unwrap();
    let span = (last - first).num_days();
    (0i64..=span).prop_map(move |days| first + Duration::days(days))
}

/// Strategy for policy identifiers: two letters then an alphanumeric serial
pub fn policy_identifier_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{2}[0-9A-Z]{2,12}"
}

/// Strategy for term and installment numbers
pub fn two_digit_number_strategy() -> impl Strategy<Value = u32> {
    1u32..=99u32
}

/// Strategy for policy symbols
pub fn policy_symbol_strategy() -> impl Strategy<Value = PolicySymbol> {
    prop_oneof![Just(PolicySymbol::Standard), Just(PolicySymbol::Migrated)]
}

/// Strategy for invoices that always encode successfully
pub fn encodable_invoice_strategy() -> impl Strategy<Value = Invoice> {
    (
        window_date_strategy(),
        policy_identifier_strategy(),
        policy_symbol_strategy(),
        window_date_strategy(),
        window_date_strategy(),
        encodable_money_strategy(),
        two_digit_number_strategy(),
        two_digit_number_strategy(),
    )
        .prop_map(
            |(
                invoice_date,
                policy_identifier,
                policy_symbol,
                policy_effective_date,
                final_accept_date,
                minimum_amount_due,
                policy_term_number,
                installment_number,
            )| Invoice {
                invoice_date,
                policy_identifier,
                policy_symbol,
                policy_effective_date,
                final_accept_date,
                minimum_amount_due,
                policy_term_number,
                installment_number,
            },
        )
}

/// Strategy for strings of decimal digits of a given length
pub fn digit_string_strategy(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..10u8, len..=len)
        .prop_map(|digits| digits.into_iter().map(|d| char::from(b'0' + d)).collect())
}
