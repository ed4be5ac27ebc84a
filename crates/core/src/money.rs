//! Money value object.
//!
//! Fixed-point decimal, currency-free scalar semantics. Tax amounts and
//! totals are compared for exact equality in business logic, so this must
//! never round through floating point.

use core::iter::Sum;
use core::ops::{Add, AddAssign};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// An exact monetary amount.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Whole currency units (e.g. `from_major(122)` is 122.00).
    pub fn from_major(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }

    /// Scaled integer units (e.g. `from_minor(23, 2)` is 0.23).
    pub fn from_minor(amount: i64, scale: u32) -> Self {
        Self(Decimal::new(amount, scale))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl ValueObject for Money {}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn equality_is_by_value() {
        assert_eq!(Money::from_major(3), Money::new(dec!(3)));
        assert_ne!(Money::from_major(3), Money::from_major(5));
    }

    #[test]
    fn addition_is_exact() {
        // The classic float trap: 0.1 + 0.2.
        let sum = Money::new(dec!(0.1)) + Money::new(dec!(0.2));
        assert_eq!(sum, Money::new(dec!(0.3)));
    }

    #[test]
    fn from_minor_scales() {
        assert_eq!(Money::from_minor(23, 2), Money::new(dec!(0.23)));
        assert_eq!(Money::from_minor(46, 2), Money::new(dec!(0.46)));
    }

    #[test]
    fn sum_over_empty_iterator_is_zero() {
        let total: Money = core::iter::empty().sum();
        assert_eq!(total, Money::ZERO);
        assert!(total.is_zero());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: addition is commutative and associative on
            /// cent-scaled amounts.
            #[test]
            fn addition_commutes(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
                let (a, b) = (Money::from_minor(a, 2), Money::from_minor(b, 2));
                prop_assert_eq!(a + b, b + a);
            }

            #[test]
            fn zero_is_identity(a in -1_000_000i64..1_000_000) {
                let a = Money::from_minor(a, 2);
                prop_assert_eq!(a + Money::ZERO, a);
            }
        }
    }
}
