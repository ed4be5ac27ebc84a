use serde::{Deserialize, Serialize};

use salesdesk_core::{DomainError, DomainResult, ProductId, ReservationId};

/// Command: add a product to a reservation.
///
/// A plain immutable value carrier. Identifiers are non-empty by
/// construction of the id types; quantity is validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddProductCommand {
    order_id: ReservationId,
    product_id: ProductId,
    quantity: u32,
}

impl AddProductCommand {
    pub fn new(
        order_id: ReservationId,
        product_id: ProductId,
        quantity: u32,
    ) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        Ok(Self {
            order_id,
            product_id,
            quantity,
        })
    }

    pub fn order_id(&self) -> &ReservationId {
        &self.order_id
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}
