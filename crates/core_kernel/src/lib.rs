//! Core Kernel - Foundational types shared across the scanline workspace
//!
//! This crate provides the fundamental building blocks used by the encoder
//! and the service layer:
//! - Money types with precise decimal arithmetic and minor-unit conversion
//! - Validated policy identifiers

pub mod money;
pub mod identifiers;

pub use money::{Money, Currency, MoneyError};
pub use identifiers::{PolicyNumber, IdentifierError};
