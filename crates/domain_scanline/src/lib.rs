//! Scanline Domain - Remittance Record Encoding
//!
//! This crate packs billing-invoice data into the fixed-width, 61-digit
//! scanline printed on remittance coupons and read back by lockbox
//! processors, and validates scanlines received from them.
//!
//! # Pipeline
//!
//! Data flows strictly upward:
//! - **Field codecs**: Julian and MMDDYY dates, minor-unit amounts
//! - **Policy fingerprint**: 8-digit MD5-derived surrogate for the policy identifier
//! - **Input string**: the 55 digits after the record header
//! - **Check digits**: digit-sum (#1) and weighted Luhn-style (#2)
//! - **Scanline**: bill ID + both check digits + input string
//!
//! Every operation is a pure function of its inputs. Invoices in a batch are
//! independent of each other.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_scanline::{generate_scanline, validate_scanline};
//!
//! let scanline = generate_scanline(&invoice)?;
//! let report = validate_scanline(scanline.as_str())?;
//! assert!(report.check_digit_1_match && report.check_digit_2_match);
//! ```

pub mod amount_codec;
pub mod check_digit;
pub mod date_codec;
pub mod encoder;
pub mod error;
pub mod fingerprint;
pub mod input_string;
pub mod invoice;
pub mod layout;
pub mod scanline;
pub mod validator;

pub use amount_codec::{decode_amount, encode_amount};
pub use check_digit::{check_digit_1, check_digit_2, check_digit_2_for_window};
pub use date_codec::{CenturyWindow, DateFieldCodec};
pub use encoder::{BatchRecord, BatchReport, ScanlineEncoder};
pub use error::{ScanlineError, ScanlineResult};
pub use fingerprint::PolicyFingerprint;
pub use input_string::{InputString, InputStringAssembler};
pub use invoice::{Invoice, PolicySymbol};
pub use layout::{ScanlineField, ScanlineFields, INPUT_STRING_LEN, SCANLINE_LEN};
pub use scanline::{BillId, Scanline, ScanlineAssembler};
pub use validator::{ScanlineValidator, ValidationReport};

/// Encodes an invoice using the default 2000..=2099 century window
pub fn generate_scanline(invoice: &Invoice) -> ScanlineResult<Scanline> {
    ScanlineEncoder::default().encode(invoice)
}

/// Re-derives both check digits of a received scanline
pub fn validate_scanline(candidate: &str) -> ScanlineResult<ValidationReport> {
    ScanlineValidator::validate(candidate)
}
