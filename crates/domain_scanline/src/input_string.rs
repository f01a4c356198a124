//! The 55-digit input string
//!
//! Everything after the bill ID and check digits. Both check digits are
//! computed from it, so it is assembled first.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::amount_codec::{encode_amount, CURRENT_BALANCE, STATE_CODE};
use crate::date_codec::DateFieldCodec;
use crate::error::{ensure_digits, ScanlineError, ScanlineResult};
use crate::fingerprint::PolicyFingerprint;
use crate::invoice::{two_digit, Invoice};
use crate::layout::{ScanlineField, CHECK_DIGIT_2_WINDOW, INPUT_STRING_LEN};

/// Lockbox number constant
pub const LOCKBOX_NUMBER: &str = "000";
/// Company number constant
pub const COMPANY_NUMBER: &str = "91";
/// Line of business constant
pub const LOB: &str = "1";
/// Location number constant
pub const LOCATION_NUMBER: &str = "00";
/// Line of business (product) constant
pub const LOBP: &str = "9";

/// Exactly 55 ASCII digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InputString(String);

impl InputString {
    /// Validates a received input string
    pub fn parse(digits: &str) -> ScanlineResult<Self> {
        ensure_digits(digits, INPUT_STRING_LEN)?;
        Ok(Self(digits.to_string()))
    }

    // Only for slices of an already validated scanline.
    pub(crate) fn from_validated(digits: String) -> Self {
        Self(digits)
    }

    /// Returns the digits
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digit values in order
    pub fn digits(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.bytes().map(|b| u32::from(b - b'0'))
    }

    /// Slice of a field that lives in the input string
    pub fn field(&self, field: ScanlineField) -> Option<&str> {
        field.input_range().map(|range| &self.0[range])
    }

    /// Fingerprint followed by the two-digit term number
    pub fn policy_number_full(&self) -> &str {
        self.field(ScanlineField::PolicyNumberFull).unwrap_or_default()
    }

    /// The 32 digits read by check digit #2
    pub fn check_digit_2_window(&self) -> &str {
        &self.0[CHECK_DIGIT_2_WINDOW]
    }
}

impl fmt::Display for InputString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for InputString {
    type Error = ScanlineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ensure_digits(&value, INPUT_STRING_LEN)?;
        Ok(Self(value))
    }
}

impl From<InputString> for String {
    fn from(input: InputString) -> String {
        input.0
    }
}

/// Builds input strings from invoices
#[derive(Debug, Clone, Copy, Default)]
pub struct InputStringAssembler {
    dates: DateFieldCodec,
}

impl InputStringAssembler {
    /// Creates an assembler using the given date codec
    pub fn new(dates: DateFieldCodec) -> Self {
        Self { dates }
    }

    /// Encodes every sub-field of `invoice` and concatenates them
    ///
    /// # Errors
    ///
    /// Propagates codec failures (`InvalidDate`, `InvalidAmount`,
    /// `AmountOverflow`, `TermOverflow`) and reports `AssemblyLength` if any
    /// encoded field has the wrong width.
    pub fn assemble(
        &self,
        invoice: &Invoice,
        fingerprint: &PolicyFingerprint,
    ) -> ScanlineResult<InputString> {
        let term = two_digit("policy term number", invoice.policy_term_number)?;
        let policy_number_full = format!("{fingerprint}{term}");

        let fields = [
            (ScanlineField::InvoiceDate, self.dates.encode_julian(invoice.invoice_date)?),
            (ScanlineField::LockboxNumber, LOCKBOX_NUMBER.to_string()),
            (ScanlineField::CompanyNumber, COMPANY_NUMBER.to_string()),
            (ScanlineField::Lob, LOB.to_string()),
            (ScanlineField::LocationNumber, LOCATION_NUMBER.to_string()),
            (ScanlineField::Lobp, LOBP.to_string()),
            (ScanlineField::PolicySymbol, invoice.policy_symbol.code().to_string()),
            (ScanlineField::PolicyNumberFull, policy_number_full),
            (
                ScanlineField::PolicyEffectiveDate,
                self.dates.encode_mmddyy(invoice.policy_effective_date)?,
            ),
            (
                ScanlineField::FinalAcceptDate,
                self.dates.encode_mmddyy(invoice.final_accept_date)?,
            ),
            (ScanlineField::MinimumAmountDue, encode_amount(&invoice.minimum_amount_due)?),
            (ScanlineField::CurrentBalance, CURRENT_BALANCE.to_string()),
            (ScanlineField::StateCode, STATE_CODE.to_string()),
        ];

        let mut assembled = String::with_capacity(INPUT_STRING_LEN);
        for (field, value) in &fields {
            check_width(*field, value)?;
            assembled.push_str(value);
        }

        ensure_digits(&assembled, INPUT_STRING_LEN)?;
        Ok(InputString(assembled))
    }
}

/// Reports `AssemblyLength` unless `value` has the field's declared width
pub(crate) fn check_width(field: ScanlineField, value: &str) -> ScanlineResult<()> {
    if value.len() != field.width() {
        return Err(ScanlineError::AssemblyLength {
            field: field.name(),
            expected: field.width(),
            actual: value.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::{Currency, Money};
    use rust_decimal_macros::dec;

    use crate::invoice::PolicySymbol;

    fn reference_invoice() -> Invoice {
        Invoice {
            invoice_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            policy_identifier: "TC123ABC45".to_string(),
            policy_symbol: PolicySymbol::Standard,
            policy_effective_date: NaiveDate::from_ymd_opt(2022, 12, 31).unwrap(),
            final_accept_date: NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
            minimum_amount_due: Money::new(dec!(53.47), Currency::USD),
            policy_term_number: 1,
            installment_number: 1,
        }
    }

    #[test]
    fn test_reference_input_string() {
        let invoice = reference_invoice();
        let fingerprint = PolicyFingerprint::derive(&invoice.policy_identifier).unwrap();
        let input = InputStringAssembler::default()
            .assemble(&invoice, &fingerprint)
            .unwrap();

        assert_eq!(
            input.as_str(),
            "2300100091100911115156840112312201312300005347000000000"
        );
        assert_eq!(input.policy_number_full(), "1151568401");
        assert_eq!(input.check_digit_2_window(), "11115156840112312201312300005347");
    }

    #[test]
    fn test_migrated_symbol() {
        let invoice = Invoice {
            policy_symbol: PolicySymbol::Migrated,
            ..reference_invoice()
        };
        let fingerprint = PolicyFingerprint::derive(&invoice.policy_identifier).unwrap();
        let input = InputStringAssembler::default()
            .assemble(&invoice, &fingerprint)
            .unwrap();

        assert_eq!(input.field(ScanlineField::PolicySymbol), Some("02"));
    }

    #[test]
    fn test_term_overflow() {
        let invoice = Invoice {
            policy_term_number: 100,
            ..reference_invoice()
        };
        let fingerprint = PolicyFingerprint::derive(&invoice.policy_identifier).unwrap();
        let result = InputStringAssembler::default().assemble(&invoice, &fingerprint);

        assert!(matches!(result, Err(ScanlineError::TermOverflow { value: 100, .. })));
    }

    #[test]
    fn test_check_width() {
        assert!(check_width(ScanlineField::LockboxNumber, "000").is_ok());
        assert_eq!(
            check_width(ScanlineField::LockboxNumber, "0000"),
            Err(ScanlineError::AssemblyLength {
                field: "Lockbox Number",
                expected: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn test_parse_rejects_letters() {
        let mut digits = "0".repeat(54);
        digits.push('A');
        assert_eq!(
            InputString::parse(&digits),
            Err(ScanlineError::NonNumeric {
                position: 55,
                character: 'A'
            })
        );
    }
}
