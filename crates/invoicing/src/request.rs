use serde::{Deserialize, Serialize};

use salesdesk_catalog::ProductData;
use salesdesk_clients::ClientData;
use salesdesk_core::{Money, ValueObject};

/// One requested line, snapshotted at request time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestItem {
    product: ProductData,
    quantity: u32,
    total_cost: Money,
}

impl RequestItem {
    pub fn new(product: ProductData, quantity: u32, total_cost: Money) -> Self {
        Self {
            product,
            quantity,
            total_cost,
        }
    }

    pub fn product(&self) -> &ProductData {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total_cost(&self) -> Money {
        self.total_cost
    }
}

impl ValueObject for RequestItem {}

/// A priced request for goods: client plus ordered items.
///
/// Insertion order is significant - it determines invoice line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRequest {
    client: ClientData,
    items: Vec<RequestItem>,
}

impl InvoiceRequest {
    pub fn new(client: ClientData) -> Self {
        Self {
            client,
            items: Vec::new(),
        }
    }

    pub fn client(&self) -> &ClientData {
        &self.client
    }

    pub fn items(&self) -> &[RequestItem] {
        &self.items
    }

    pub fn add(&mut self, item: RequestItem) {
        self.items.push(item);
    }
}
