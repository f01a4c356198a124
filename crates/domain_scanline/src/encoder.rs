//! Invoice to scanline pipeline
//!
//! Raw invoice fields flow upward through the codecs into the input string,
//! then into both check digits, then into the final record.

use serde::Serialize;
use tracing::{debug, info, warn};

use core_kernel::Money;

use crate::check_digit::{check_digit_1, check_digit_2};
use crate::date_codec::{CenturyWindow, DateFieldCodec};
use crate::error::{ScanlineError, ScanlineResult};
use crate::fingerprint::PolicyFingerprint;
use crate::input_string::InputStringAssembler;
use crate::invoice::Invoice;
use crate::scanline::{BillId, Scanline, ScanlineAssembler};

/// Encodes invoices into scanlines
///
/// Holds only configuration, so one encoder can be shared freely across
/// threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanlineEncoder {
    assembler: InputStringAssembler,
}

impl ScanlineEncoder {
    /// Creates an encoder whose two-digit years resolve into `window`
    pub fn new(window: CenturyWindow) -> Self {
        Self {
            assembler: InputStringAssembler::new(DateFieldCodec::new(window)),
        }
    }

    /// Encodes a single invoice
    ///
    /// # Errors
    ///
    /// Any [`ScanlineError`] raised by the field codecs, the fingerprint or
    /// the width checks. The invoice is never modified.
    pub fn encode(&self, invoice: &Invoice) -> ScanlineResult<Scanline> {
        let bill_id = BillId::new(invoice.policy_term_number, invoice.installment_number)?;
        let fingerprint = PolicyFingerprint::derive(&invoice.policy_identifier)?;
        let input = self.assembler.assemble(invoice, &fingerprint)?;

        let scanline = ScanlineAssembler::assemble(
            &bill_id,
            check_digit_1(&input),
            check_digit_2(&input),
            &input,
        )?;

        debug!(
            bill_id = %bill_id,
            scanline = %scanline,
            "Generated scanline"
        );
        Ok(scanline)
    }

    /// Encodes every invoice independently
    ///
    /// A failing invoice is recorded in the report and does not stop the
    /// rest of the batch.
    pub fn encode_batch(&self, invoices: &[Invoice]) -> BatchReport {
        let mut report = BatchReport::default();

        for (index, invoice) in invoices.iter().enumerate() {
            match self.encode(invoice) {
                Ok(scanline) => {
                    report.add_to_totals(&invoice.minimum_amount_due);
                    report.records.push(BatchRecord::encoded(index, scanline));
                }
                Err(error) => {
                    warn!(
                        index,
                        policy = %invoice.policy_identifier,
                        error = %error,
                        "Skipping invoice that cannot be encoded"
                    );
                    report.records.push(BatchRecord::failed(index, error));
                }
            }
        }

        info!(
            total = invoices.len(),
            encoded = report.encoded_count(),
            failed = report.failed_count(),
            "Encoded scanline batch"
        );
        report
    }
}

/// Outcome for one invoice of a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRecord {
    /// Position of the invoice in the input slice
    pub index: usize,
    /// Generated record, if encoding succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scanline: Option<Scanline>,
    /// Failure message, if encoding failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip)]
    failure: Option<ScanlineError>,
}

impl BatchRecord {
    fn encoded(index: usize, scanline: Scanline) -> Self {
        Self {
            index,
            scanline: Some(scanline),
            error: None,
            failure: None,
        }
    }

    fn failed(index: usize, failure: ScanlineError) -> Self {
        Self {
            index,
            scanline: None,
            error: Some(failure.to_string()),
            failure: Some(failure),
        }
    }

    /// The typed error for a failed record
    pub fn failure(&self) -> Option<&ScanlineError> {
        self.failure.as_ref()
    }

    /// True if the invoice was encoded
    pub fn is_encoded(&self) -> bool {
        self.scanline.is_some()
    }
}

/// Per-record results of a batch, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub records: Vec<BatchRecord>,
    /// Sum of minimum amounts due over encoded records, one entry per currency
    pub amount_due_totals: Vec<Money>,
}

impl BatchReport {
    /// Number of encoded invoices
    pub fn encoded_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_encoded()).count()
    }

    /// Number of failed invoices
    pub fn failed_count(&self) -> usize {
        self.records.len() - self.encoded_count()
    }

    /// Successfully generated scanlines in input order
    pub fn scanlines(&self) -> impl Iterator<Item = &Scanline> {
        self.records.iter().filter_map(|r| r.scanline.as_ref())
    }

    fn add_to_totals(&mut self, amount: &Money) {
        let amount = amount.round_to_currency();
        let existing = self
            .amount_due_totals
            .iter_mut()
            .find(|total| total.currency() == amount.currency());

        match existing {
            Some(total) => match total.checked_add(&amount) {
                Ok(sum) => *total = sum,
                Err(error) => warn!(error = %error, "Batch total not updated"),
            },
            None => self.amount_due_totals.push(amount),
        }
    }
}
