//! The 61-digit scanline record

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ensure_digits, ScanlineError, ScanlineResult};
use crate::input_string::{check_width, InputString};
use crate::invoice::two_digit;
use crate::layout::{ScanlineField, ScanlineFields, INPUT_STRING_OFFSET, SCANLINE_LEN};

/// Policy term number followed by installment number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BillId {
    term: u32,
    installment: u32,
}

impl BillId {
    /// Creates a bill ID, both parts in 1..=99
    pub fn new(term: u32, installment: u32) -> ScanlineResult<Self> {
        two_digit("policy term number", term)?;
        two_digit("installment number", installment)?;
        Ok(Self { term, installment })
    }

    /// Policy term number
    pub fn term(&self) -> u32 {
        self.term
    }

    /// Installment number
    pub fn installment(&self) -> u32 {
        self.installment
    }
}

impl fmt::Display for BillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.term, self.installment)
    }
}

/// Exactly 61 ASCII digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Scanline(String);

impl Scanline {
    /// Accepts a received record after checking length and digits
    pub fn parse(record: &str) -> ScanlineResult<Self> {
        ensure_digits(record, SCANLINE_LEN)?;
        Ok(Self(record.to_string()))
    }

    /// Returns the record
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Embedded check digit #1
    pub fn check_digit_1(&self) -> u8 {
        self.digit_at(ScanlineField::CheckDigit1)
    }

    /// Embedded check digit #2
    pub fn check_digit_2(&self) -> u8 {
        self.digit_at(ScanlineField::CheckDigit2)
    }

    /// The embedded 55-digit input string
    pub fn input_string(&self) -> InputString {
        InputString::from_validated(self.0[INPUT_STRING_OFFSET..].to_string())
    }

    /// Borrowed view of every field
    pub fn fields(&self) -> ScanlineFields<'_> {
        ScanlineFields::split(&self.0)
    }

    fn digit_at(&self, field: ScanlineField) -> u8 {
        self.0.as_bytes()[field.range().start] - b'0'
    }
}

impl fmt::Display for Scanline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Scanline {
    type Error = ScanlineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ensure_digits(&value, SCANLINE_LEN)?;
        Ok(Self(value))
    }
}

impl From<Scanline> for String {
    fn from(scanline: Scanline) -> String {
        scanline.0
    }
}

/// Concatenates the scanline components
pub struct ScanlineAssembler;

impl ScanlineAssembler {
    /// Builds `bill_id + cd1 + cd2 + input`
    ///
    /// # Errors
    ///
    /// `AssemblyLength` if a component does not render at its declared width,
    /// e.g. a check digit above 9.
    pub fn assemble(
        bill_id: &BillId,
        check_digit_1: u8,
        check_digit_2: u8,
        input: &InputString,
    ) -> ScanlineResult<Scanline> {
        let parts = [
            (ScanlineField::BillId, bill_id.to_string()),
            (ScanlineField::CheckDigit1, check_digit_1.to_string()),
            (ScanlineField::CheckDigit2, check_digit_2.to_string()),
        ];

        let mut record = String::with_capacity(SCANLINE_LEN);
        for (field, value) in &parts {
            check_width(*field, value)?;
            record.push_str(value);
        }

        let input = input.as_str();
        if input.len() != SCANLINE_LEN - INPUT_STRING_OFFSET {
            return Err(ScanlineError::AssemblyLength {
                field: "Input String",
                expected: SCANLINE_LEN - INPUT_STRING_OFFSET,
                actual: input.len(),
            });
        }
        record.push_str(input);

        Scanline::try_from(record)
    }
}
