//! Rate-table tax policy.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use salesdesk_catalog::ProductType;
use salesdesk_core::{DomainError, DomainResult, Money};
use salesdesk_invoicing::{Tax, TaxPolicy};

/// Tax policy backed by a per-classification rate table.
///
/// Rates are fractions (0.23 for 23%). The description renders the rate as
/// a percentage. A classification without a configured rate is a policy
/// error - the core never invents a default rate.
#[derive(Debug, Clone, Default)]
pub struct RateTableTaxPolicy {
    rates: BTreeMap<ProductType, Decimal>,
}

impl RateTableTaxPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rate(mut self, product_type: ProductType, rate: Decimal) -> Self {
        self.rates.insert(product_type, rate);
        self
    }
}

impl TaxPolicy for RateTableTaxPolicy {
    fn calculate_tax(&self, product_type: ProductType, net: Money) -> DomainResult<Tax> {
        let rate = self.rates.get(&product_type).ok_or_else(|| {
            DomainError::policy(format!("no rate configured for {product_type:?}"))
        })?;

        let amount = Money::new(net.amount() * rate);
        let percent = (rate * Decimal::ONE_HUNDRED).normalize();
        Ok(Tax::new(amount, format!("{percent}%")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn computes_amount_and_renders_percentage() {
        let policy = RateTableTaxPolicy::new().with_rate(ProductType::Standard, dec!(0.23));

        let tax = policy
            .calculate_tax(ProductType::Standard, Money::from_major(1))
            .unwrap();
        assert_eq!(tax.amount(), Money::new(dec!(0.23)));
        assert_eq!(tax.description(), "23%");
    }

    #[test]
    fn missing_rate_is_a_policy_error() {
        let policy = RateTableTaxPolicy::new().with_rate(ProductType::Standard, dec!(0.23));

        let err = policy
            .calculate_tax(ProductType::Drug, Money::from_major(1))
            .unwrap_err();
        match err {
            DomainError::Policy(msg) if msg.contains("Drug") => {}
            _ => panic!("Expected Policy error for missing rate"),
        }
    }

    #[test]
    fn tax_is_exact_for_fractional_nets() {
        let policy = RateTableTaxPolicy::new().with_rate(ProductType::Food, dec!(0.46));

        let tax = policy
            .calculate_tax(ProductType::Food, Money::new(dec!(5)))
            .unwrap();
        assert_eq!(tax.amount(), Money::new(dec!(2.30)));
        assert_eq!(tax.description(), "46%");
    }
}
