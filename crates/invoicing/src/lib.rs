//! Invoicing domain module.
//!
//! This crate turns a priced request for goods into an invoice, delegating
//! rate computation to an injected tax policy so invoice construction stays
//! decoupled from tax-rate knowledge. Pure domain logic, no IO.

pub mod book_keeper;
pub mod invoice;
pub mod request;
pub mod tax;

pub use book_keeper::BookKeeper;
pub use invoice::{Invoice, InvoiceFactory, InvoiceLine, SimpleInvoiceFactory};
pub use request::{InvoiceRequest, RequestItem};
pub use tax::{Tax, TaxPolicy};
