//! Fixed-width record layout
//!
//! The layout table below is the single source of truth for field widths
//! and offsets. Assembly checks widths against it and validation slices
//! received records with it.
//!
//! | Field                 | Positions | Width |
//! |-----------------------|-----------|-------|
//! | Bill ID               | 1-4       | 4     |
//! | Check Digit #1        | 5         | 1     |
//! | Check Digit #2        | 6         | 1     |
//! | Invoice Date          | 7-11      | 5     |
//! | Lockbox Number        | 12-14     | 3     |
//! | Company Number        | 15-16     | 2     |
//! | LOB                   | 17        | 1     |
//! | Location Number       | 18-19     | 2     |
//! | LOBP                  | 20        | 1     |
//! | Policy Symbol         | 21-22     | 2     |
//! | Policy Number Full    | 23-32     | 10    |
//! | Policy Effective Date | 33-38     | 6     |
//! | Final Accept Date     | 39-44     | 6     |
//! | Minimum Amount Due    | 45-52     | 8     |
//! | Current Balance       | 53-60     | 8     |
//! | State Code            | 61        | 1     |

use std::ops::Range;

use serde::Serialize;

use crate::error::{ensure_digits, ScanlineResult};

/// Total scanline width
pub const SCANLINE_LEN: usize = 61;

/// Width of the input string embedded at the end of the scanline
pub const INPUT_STRING_LEN: usize = 55;

/// Offset of the input string inside the scanline
pub const INPUT_STRING_OFFSET: usize = SCANLINE_LEN - INPUT_STRING_LEN;

/// Input-string offsets (0-based, end exclusive) covered by check digit #2
pub const CHECK_DIGIT_2_WINDOW: Range<usize> = 14..46;

/// Named fields of the scanline, in record order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanlineField {
    BillId,
    CheckDigit1,
    CheckDigit2,
    InvoiceDate,
    LockboxNumber,
    CompanyNumber,
    Lob,
    LocationNumber,
    Lobp,
    PolicySymbol,
    PolicyNumberFull,
    PolicyEffectiveDate,
    FinalAcceptDate,
    MinimumAmountDue,
    CurrentBalance,
    StateCode,
}

impl ScanlineField {
    /// Every field in record order
    pub const ALL: [ScanlineField; 16] = [
        ScanlineField::BillId,
        ScanlineField::CheckDigit1,
        ScanlineField::CheckDigit2,
        ScanlineField::InvoiceDate,
        ScanlineField::LockboxNumber,
        ScanlineField::CompanyNumber,
        ScanlineField::Lob,
        ScanlineField::LocationNumber,
        ScanlineField::Lobp,
        ScanlineField::PolicySymbol,
        ScanlineField::PolicyNumberFull,
        ScanlineField::PolicyEffectiveDate,
        ScanlineField::FinalAcceptDate,
        ScanlineField::MinimumAmountDue,
        ScanlineField::CurrentBalance,
        ScanlineField::StateCode,
    ];

    /// Width in characters
    pub const fn width(&self) -> usize {
        match self {
            ScanlineField::BillId => 4,
            ScanlineField::CheckDigit1 => 1,
            ScanlineField::CheckDigit2 => 1,
            ScanlineField::InvoiceDate => 5,
            ScanlineField::LockboxNumber => 3,
            ScanlineField::CompanyNumber => 2,
            ScanlineField::Lob => 1,
            ScanlineField::LocationNumber => 2,
            ScanlineField::Lobp => 1,
            ScanlineField::PolicySymbol => 2,
            ScanlineField::PolicyNumberFull => 10,
            ScanlineField::PolicyEffectiveDate => 6,
            ScanlineField::FinalAcceptDate => 6,
            ScanlineField::MinimumAmountDue => 8,
            ScanlineField::CurrentBalance => 8,
            ScanlineField::StateCode => 1,
        }
    }

    /// 0-based offset of the field inside the scanline
    pub fn offset(&self) -> usize {
        Self::ALL
            .iter()
            .take_while(|field| *field != self)
            .map(|field| field.width())
            .sum()
    }

    /// Byte range of the field inside the scanline
    pub fn range(&self) -> Range<usize> {
        let start = self.offset();
        start..start + self.width()
    }

    /// Byte range inside the input string, `None` for the scanline header
    pub fn input_range(&self) -> Option<Range<usize>> {
        let range = self.range();
        (range.start >= INPUT_STRING_OFFSET)
            .then(|| range.start - INPUT_STRING_OFFSET..range.end - INPUT_STRING_OFFSET)
    }

    /// Human-readable field name
    pub fn name(&self) -> &'static str {
        match self {
            ScanlineField::BillId => "Bill ID",
            ScanlineField::CheckDigit1 => "Check Digit #1",
            ScanlineField::CheckDigit2 => "Check Digit #2",
            ScanlineField::InvoiceDate => "Invoice Date",
            ScanlineField::LockboxNumber => "Lockbox Number",
            ScanlineField::CompanyNumber => "Company Number",
            ScanlineField::Lob => "LOB",
            ScanlineField::LocationNumber => "Location Number",
            ScanlineField::Lobp => "LOBP",
            ScanlineField::PolicySymbol => "Policy Symbol",
            ScanlineField::PolicyNumberFull => "Policy Number Full",
            ScanlineField::PolicyEffectiveDate => "Policy Effective Date",
            ScanlineField::FinalAcceptDate => "Final Accept Date",
            ScanlineField::MinimumAmountDue => "Minimum Amount Due",
            ScanlineField::CurrentBalance => "Current Balance",
            ScanlineField::StateCode => "State Code",
        }
    }
}

/// Borrowed view of every field of a scanline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanlineFields<'a> {
    pub bill_id: &'a str,
    pub check_digit_1: &'a str,
    pub check_digit_2: &'a str,
    pub invoice_date: &'a str,
    pub lockbox_number: &'a str,
    pub company_number: &'a str,
    pub lob: &'a str,
    pub location_number: &'a str,
    pub lobp: &'a str,
    pub policy_symbol: &'a str,
    pub policy_number_full: &'a str,
    pub policy_effective_date: &'a str,
    pub final_accept_date: &'a str,
    pub minimum_amount_due: &'a str,
    pub current_balance: &'a str,
    pub state_code: &'a str,
}

impl<'a> ScanlineFields<'a> {
    /// Splits a 61-digit record into its fields
    pub fn parse(record: &'a str) -> ScanlineResult<Self> {
        ensure_digits(record, SCANLINE_LEN)?;
        Ok(Self::split(record))
    }

    // `record` must already be 61 ASCII digits.
    pub(crate) fn split(record: &'a str) -> Self {
        let slice = |field: ScanlineField| &record[field.range()];

        Self {
            bill_id: slice(ScanlineField::BillId),
            check_digit_1: slice(ScanlineField::CheckDigit1),
            check_digit_2: slice(ScanlineField::CheckDigit2),
            invoice_date: slice(ScanlineField::InvoiceDate),
            lockbox_number: slice(ScanlineField::LockboxNumber),
            company_number: slice(ScanlineField::CompanyNumber),
            lob: slice(ScanlineField::Lob),
            location_number: slice(ScanlineField::LocationNumber),
            lobp: slice(ScanlineField::Lobp),
            policy_symbol: slice(ScanlineField::PolicySymbol),
            policy_number_full: slice(ScanlineField::PolicyNumberFull),
            policy_effective_date: slice(ScanlineField::PolicyEffectiveDate),
            final_accept_date: slice(ScanlineField::FinalAcceptDate),
            minimum_amount_due: slice(ScanlineField::MinimumAmountDue),
            current_balance: slice(ScanlineField::CurrentBalance),
            state_code: slice(ScanlineField::StateCode),
        }
    }

    /// The 55-digit input string embedded in the record
    pub fn input_string(&self) -> String {
        [
            self.invoice_date,
            self.lockbox_number,
            self.company_number,
            self.lob,
            self.location_number,
            self.lobp,
            self.policy_symbol,
            self.policy_number_full,
            self.policy_effective_date,
            self.final_accept_date,
            self.minimum_amount_due,
            self.current_balance,
            self.state_code,
        ]
        .concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths_cover_the_record() {
        let total: usize = ScanlineField::ALL.iter().map(|f| f.width()).sum();
        assert_eq!(total, SCANLINE_LEN);
    }

    #[test]
    fn test_positions_match_the_layout_table() {
        assert_eq!(ScanlineField::BillId.range(), 0..4);
        assert_eq!(ScanlineField::CheckDigit2.range(), 5..6);
        assert_eq!(ScanlineField::CompanyNumber.range(), 14..16);
        assert_eq!(ScanlineField::PolicyNumberFull.range(), 22..32);
        assert_eq!(ScanlineField::StateCode.range(), 60..61);
    }

    #[test]
    fn test_check_digit_2_window_spans_symbol_through_amount() {
        let start = ScanlineField::PolicySymbol.input_range().unwrap().start;
        let end = ScanlineField::MinimumAmountDue.input_range().unwrap().end;
        assert_eq!(start..end, CHECK_DIGIT_2_WINDOW);
    }

    #[test]
    fn test_header_fields_have_no_input_range() {
        assert!(ScanlineField::BillId.input_range().is_none());
        assert!(ScanlineField::CheckDigit1.input_range().is_none());
        assert_eq!(ScanlineField::InvoiceDate.input_range(), Some(0..5));
    }
}
