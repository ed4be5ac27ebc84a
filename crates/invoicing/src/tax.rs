use serde::{Deserialize, Serialize};

use salesdesk_catalog::ProductType;
use salesdesk_core::{DomainResult, Money, ValueObject};

/// A computed tax: amount plus a human-readable description (e.g. "23%").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tax {
    amount: Money,
    description: String,
}

impl Tax {
    pub fn new(amount: Money, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl ValueObject for Tax {}

/// Collaborator contract: external rate determination.
///
/// Keyed by product classification and line cost. Treated as a pure
/// function for the duration of one issuance; a failure here aborts the
/// whole issuance (`DomainError::Policy`).
pub trait TaxPolicy {
    fn calculate_tax(&self, product_type: ProductType, net: Money) -> DomainResult<Tax>;
}
