//! Test Data Builders
//!
//! Provides builder patterns for constructing test invoices with sensible
//! defaults. Tests specify only the fields they care about; everything else
//! comes from the reference invoice.

use chrono::NaiveDate;
use core_kernel::Money;
use domain_scanline::{Invoice, PolicySymbol};

use crate::fixtures::ReferenceFixtures;

/// Builder for constructing test invoices
pub struct TestInvoiceBuilder {
    invoice: Invoice,
}

impl Default for TestInvoiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestInvoiceBuilder {
    /// Creates a builder seeded with the reference invoice
    pub fn new() -> Self {
        Self {
            invoice: ReferenceFixtures::invoice(),
        }
    }

    /// Sets the invoice date
    pub fn with_invoice_date(mut self, date: NaiveDate) -> Self {
        self.invoice.invoice_date = date;
        self
    }

    /// Sets the policy identifier
    pub fn with_policy_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.invoice.policy_identifier = identifier.into();
        self
    }

    /// Sets the policy symbol
    pub fn with_policy_symbol(mut self, symbol: PolicySymbol) -> Self {
        self.invoice.policy_symbol = symbol;
        self
    }

    /// Sets the policy effective date
    pub fn with_policy_effective_date(mut self, date: NaiveDate) -> Self {
        self.invoice.policy_effective_date = date;
        self
    }

    /// Sets the final accept date
    pub fn with_final_accept_date(mut self, date: NaiveDate) -> Self {
        self.invoice.final_accept_date = date;
        self
    }

    /// Sets the minimum amount due
    pub fn with_minimum_amount_due(mut self, amount: Money) -> Self {
        self.invoice.minimum_amount_due = amount;
        self
    }

    /// Sets the policy term number
    pub fn with_term(mut self, term: u32) -> Self {
        self.invoice.policy_term_number = term;
        self
    }

    /// Sets the installment number
    pub fn with_installment(mut self, installment: u32) -> Self {
        self.invoice.installment_number = installment;
        self
    }

    /// Builds the invoice
    pub fn build(self) -> Invoice {
        self.invoice
    }
}
