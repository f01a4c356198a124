//! Scanline DTOs

use chrono::NaiveDate;
use core_kernel::{Currency, Money};
use domain_scanline::{
    BatchReport, Invoice, PolicySymbol, Scanline, ScanlineField, ValidationReport,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_currency() -> Currency {
    Currency::USD
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateScanlineRequest {
    pub invoice_date: NaiveDate,
    pub policy_identifier: String,
    #[serde(default)]
    pub policy_symbol: PolicySymbol,
    pub policy_effective_date: NaiveDate,
    pub final_accept_date: NaiveDate,
    pub minimum_amount_due: Decimal,
    #[serde(default = "default_currency")]
    pub currency: Currency,
    pub policy_term_number: u32,
    pub installment_number: u32,
}

impl From<GenerateScanlineRequest> for Invoice {
    fn from(request: GenerateScanlineRequest) -> Self {
        Invoice {
            invoice_date: request.invoice_date,
            policy_identifier: request.policy_identifier,
            policy_symbol: request.policy_symbol,
            policy_effective_date: request.policy_effective_date,
            final_accept_date: request.final_accept_date,
            minimum_amount_due: Money::new(request.minimum_amount_due, request.currency),
            policy_term_number: request.policy_term_number,
            installment_number: request.installment_number,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BatchScanlineRequest {
    pub invoices: Vec<GenerateScanlineRequest>,
}

#[derive(Debug, Deserialize)]
pub struct ValidateScanlineRequest {
    pub scanline: String,
    pub policy_identifier: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FieldResponse {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct ScanlineResponse {
    pub scanline: Scanline,
    pub check_digit_1: u8,
    pub check_digit_2: u8,
    pub fields: Vec<FieldResponse>,
}

impl From<Scanline> for ScanlineResponse {
    fn from(scanline: Scanline) -> Self {
        let fields = ScanlineField::ALL
            .iter()
            .map(|field| FieldResponse {
                name: field.name(),
                value: scanline.as_str()[field.range()].to_string(),
            })
            .collect();

        Self {
            check_digit_1: scanline.check_digit_1(),
            check_digit_2: scanline.check_digit_2(),
            fields,
            scanline,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ValidateScanlineResponse {
    pub valid: bool,
    #[serde(flatten)]
    pub report: ValidationReport,
}

impl From<ValidationReport> for ValidateScanlineResponse {
    fn from(report: ValidationReport) -> Self {
        Self {
            valid: report.is_valid(),
            report,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BatchScanlineResponse {
    pub encoded: usize,
    pub failed: usize,
    #[serde(flatten)]
    pub report: BatchReport,
}

impl From<BatchReport> for BatchScanlineResponse {
    fn from(report: BatchReport) -> Self {
        Self {
            encoded: report.encoded_count(),
            failed: report.failed_count(),
            report,
        }
    }
}
