use serde::{Deserialize, Serialize};

use salesdesk_catalog::ProductData;
use salesdesk_clients::ClientData;
use salesdesk_core::{Money, ValueObject};

use crate::tax::Tax;

/// Invoice line: a request item's product data paired with its computed tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    product: ProductData,
    quantity: u32,
    net: Money,
    tax: Tax,
}

impl InvoiceLine {
    pub fn new(product: ProductData, quantity: u32, net: Money, tax: Tax) -> Self {
        Self {
            product,
            quantity,
            net,
            tax,
        }
    }

    pub fn product(&self) -> &ProductData {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn net(&self) -> Money {
        self.net
    }

    pub fn tax(&self) -> &Tax {
        &self.tax
    }

    pub fn gross(&self) -> Money {
        self.net + self.tax.amount()
    }
}

impl ValueObject for InvoiceLine {}

/// An invoice: client plus ordered, taxed line items.
///
/// Grows monotonically while issuance appends lines; never mutated after
/// issuance completes. Running net/gross totals are maintained per append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    client: ClientData,
    lines: Vec<InvoiceLine>,
    net: Money,
    gross: Money,
}

impl Invoice {
    pub fn new(client: ClientData) -> Self {
        Self {
            client,
            lines: Vec::new(),
            net: Money::ZERO,
            gross: Money::ZERO,
        }
    }

    pub fn client(&self) -> &ClientData {
        &self.client
    }

    pub fn lines(&self) -> &[InvoiceLine] {
        &self.lines
    }

    pub fn net(&self) -> Money {
        self.net
    }

    pub fn gross(&self) -> Money {
        self.gross
    }

    pub fn add_line(&mut self, line: InvoiceLine) {
        self.net += line.net();
        self.gross += line.gross();
        self.lines.push(line);
    }
}

/// Collaborator contract: invoice construction.
///
/// Keeps `BookKeeper` from hard-coding how invoices come into being.
pub trait InvoiceFactory {
    fn create(&self, client: ClientData) -> Invoice;
}

/// Default factory: an empty invoice bound to the client.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleInvoiceFactory;

impl InvoiceFactory for SimpleInvoiceFactory {
    fn create(&self, client: ClientData) -> Invoice {
        Invoice::new(client)
    }
}
