//! Scanline handlers

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use domain_scanline::{Invoice, PolicyFingerprint, ScanlineValidator};

use crate::dto::scanline::*;
use crate::{error::ApiError, AppState};

/// Generates the scanline for one invoice
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateScanlineRequest>, JsonRejection>,
) -> Result<Json<ScanlineResponse>, ApiError> {
    let Json(request) = payload?;
    let invoice = Invoice::from(request);
    let scanline = state.encoder.encode(&invoice)?;
    Ok(Json(ScanlineResponse::from(scanline)))
}

/// Generates scanlines for a list of invoices
///
/// Individual failures are reported per record; the request itself succeeds.
pub async fn generate_batch(
    State(state): State<AppState>,
    payload: Result<Json<BatchScanlineRequest>, JsonRejection>,
) -> Result<Json<BatchScanlineResponse>, ApiError> {
    let Json(request) = payload?;
    let invoices: Vec<Invoice> = request.invoices.into_iter().map(Invoice::from).collect();
    let report = state.encoder.encode_batch(&invoices);
    Ok(Json(BatchScanlineResponse::from(report)))
}

/// Validates a received scanline
pub async fn validate(
    payload: Result<Json<ValidateScanlineRequest>, JsonRejection>,
) -> Result<Json<ValidateScanlineResponse>, ApiError> {
    let Json(request) = payload?;
    let fingerprint = request
        .policy_identifier
        .as_deref()
        .map(PolicyFingerprint::derive)
        .transpose()?;

    let report = ScanlineValidator::validate_for_policy(&request.scanline, fingerprint.as_ref())?;
    Ok(Json(ValidateScanlineResponse::from(report)))
}
