//! Invoice issuance.

use crate::invoice::{Invoice, InvoiceFactory, InvoiceLine};
use crate::request::InvoiceRequest;
use crate::tax::TaxPolicy;
use salesdesk_core::DomainResult;

/// Turns a priced request into an invoice, one taxed line per request item.
///
/// Rate computation is delegated to the injected [`TaxPolicy`]; invoice
/// construction to the injected [`InvoiceFactory`]. The book keeper itself
/// only decides line assembly and ordering.
#[derive(Debug, Clone)]
pub struct BookKeeper<F: InvoiceFactory> {
    factory: F,
}

impl<F: InvoiceFactory> BookKeeper<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Issue an invoice for `request`.
    ///
    /// The tax policy is consulted exactly once per item, in insertion
    /// order, even when two items share classification and cost - each
    /// request item is an independent economic event. A policy failure
    /// aborts the whole issuance; no partial invoice escapes. Zero items
    /// yield a zero-line invoice, which is valid.
    pub fn issuance(
        &self,
        request: &InvoiceRequest,
        tax_policy: &dyn TaxPolicy,
    ) -> DomainResult<Invoice> {
        let mut invoice = self.factory.create(request.client().clone());

        for item in request.items() {
            let tax = tax_policy.calculate_tax(item.product().product_type(), item.total_cost())?;
            invoice.add_line(InvoiceLine::new(
                item.product().clone(),
                item.quantity(),
                item.total_cost(),
                tax,
            ));
        }

        Ok(invoice)
    }
}
