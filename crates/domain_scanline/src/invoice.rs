//! Invoice input to the encoder
//!
//! The encoder only reads these values; sourcing them is the caller's job.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::error::{ScanlineError, ScanlineResult};

/// Policy symbol code, selected by the policy's migration status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicySymbol {
    /// Policy administered on the current platform
    #[default]
    Standard,
    /// Policy migrated from the legacy platform
    Migrated,
}

impl PolicySymbol {
    /// Two-digit code written to the record
    pub fn code(&self) -> &'static str {
        match self {
            PolicySymbol::Standard => "11",
            PolicySymbol::Migrated => "02",
        }
    }

    /// Looks up a symbol by its two-digit code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "11" => Some(PolicySymbol::Standard),
            "02" => Some(PolicySymbol::Migrated),
            _ => None,
        }
    }
}

/// A billing installment to be encoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Date the invoice was produced
    pub invoice_date: NaiveDate,
    /// Raw policy identifier, 2-character prefix followed by the serial
    pub policy_identifier: String,
    /// Policy symbol code
    #[serde(default)]
    pub policy_symbol: PolicySymbol,
    /// Policy effective date
    pub policy_effective_date: NaiveDate,
    /// Last date a payment is accepted for this installment
    pub final_accept_date: NaiveDate,
    /// Minimum amount due
    pub minimum_amount_due: Money,
    /// Policy term number, 1..=99
    pub policy_term_number: u32,
    /// Installment number within the term, 1..=99
    pub installment_number: u32,
}

/// Renders a term or installment number as two zero-padded digits
///
/// # Errors
///
/// `TermOverflow` when `value` is outside 1..=99.
pub(crate) fn two_digit(field: &'static str, value: u32) -> ScanlineResult<String> {
    if !(1..=99).contains(&value) {
        return Err(ScanlineError::TermOverflow { field, value });
    }
    Ok(format!("{value:02}"))
}
