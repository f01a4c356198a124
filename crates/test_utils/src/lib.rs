//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! scanline test suite.
//!
//! # Modules
//!
//! - `fixtures`: The reference invoice and its expected encodings
//! - `builders`: Builder patterns for test invoices
//! - `assertions`: Custom assertion helpers for scanline types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
