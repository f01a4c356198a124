//! Amount field encoding
//!
//! Amounts are written as integer minor units of their currency,
//! zero-padded to eight digits.

use core_kernel::{Currency, Money};

use crate::error::{ensure_digits, ScanlineError, ScanlineResult};

/// Width of every amount field
pub const AMOUNT_WIDTH: usize = 8;

/// Largest encodable amount in minor units
pub const MAX_MINOR_UNITS: i64 = 99_999_999;

/// Current balance is always reported as zero
pub const CURRENT_BALANCE: &str = "00000000";

/// State code is always zero
pub const STATE_CODE: &str = "0";

/// Encodes an amount as eight zero-padded digits of minor units
///
/// # Errors
///
/// - `InvalidAmount` for negative amounts
/// - `AmountOverflow` when the value needs more than eight digits
pub fn encode_amount(amount: &Money) -> ScanlineResult<String> {
    if amount.is_negative() {
        return Err(ScanlineError::InvalidAmount(format!(
            "{amount} is negative"
        )));
    }

    // Range-check before scaling so huge amounts never reach the i64 conversion.
    let rounded = amount.round_to_currency();
    let maximum = Money::from_minor(MAX_MINOR_UNITS, amount.currency());
    if rounded.amount() > maximum.amount() {
        return Err(ScanlineError::AmountOverflow {
            amount: rounded,
            width: AMOUNT_WIDTH,
        });
    }

    let minor_units = rounded.to_minor_units()?;

    Ok(format!("{:0width$}", minor_units, width = AMOUNT_WIDTH))
}

/// Decodes an eight-digit minor-unit field back into money
pub fn decode_amount(field: &str, currency: Currency) -> ScanlineResult<Money> {
    ensure_digits(field, AMOUNT_WIDTH)?;
    let minor_units: i64 = field
        .parse()
        .map_err(|_| ScanlineError::InvalidAmount(format!("{field:?} is not an amount")))?;
    Ok(Money::from_minor(minor_units, currency))
}
