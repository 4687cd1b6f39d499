//! # Measure
//!
//! How much of a line item is in the cart: a whole quantity for products,
//! a weight in kilograms for services.
//!
//! ```text
//! ┌──────────────┬──────────────┬─────────┬───────────┐
//! │ ItemKind     │ Measure      │ Minimum │ Increment │
//! ├──────────────┼──────────────┼─────────┼───────────┤
//! │ Product      │ Quantity(n)  │ 1       │ 1         │
//! │ Service      │ Weight(kg)   │ 0.5 kg  │ 0.5 kg    │
//! └──────────────┴──────────────┴─────────┴───────────┘
//! ```
//!
//! Every constructor and mutation clamps to the minimum instead of failing.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::ItemKind;
use crate::money::Money;
use crate::{MIN_QUANTITY, MIN_WEIGHT_KG, QUANTITY_STEP, WEIGHT_STEP_KG};

/// Quantity or weight of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum Measure {
    /// Number of units (products).
    Quantity(u32),
    /// Kilograms (services).
    Weight(#[ts(type = "string")] Decimal),
}

impl Measure {
    /// The smallest measure allowed for `kind`.
    pub fn minimum(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Product => Measure::Quantity(MIN_QUANTITY),
            ItemKind::Service => Measure::Weight(MIN_WEIGHT_KG),
        }
    }

    /// Builds a clamped quantity.
    pub fn quantity(qty: u32) -> Self {
        Measure::Quantity(qty.max(MIN_QUANTITY))
    }

    /// Builds a clamped weight.
    pub fn weight(kg: Decimal) -> Self {
        Measure::Weight(kg.max(MIN_WEIGHT_KG).normalize())
    }

    /// Converts a raw number from the UI into a measure for `kind`.
    ///
    /// Products keep only the integer part (2.7 → 2); anything below the
    /// minimum clamps up to it.
    ///
    /// ```rust
    /// use laundry_core::catalog::ItemKind;
    /// use laundry_core::measure::Measure;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Measure::from_decimal(ItemKind::Product, Decimal::ZERO), Measure::Quantity(1));
    /// assert_eq!(
    ///     Measure::from_decimal(ItemKind::Service, Decimal::new(1, 1)),
    ///     Measure::Weight(Decimal::new(5, 1)),
    /// );
    /// ```
    pub fn from_decimal(kind: ItemKind, value: Decimal) -> Self {
        match kind {
            ItemKind::Product => {
                let whole = value.trunc();
                let qty = if whole < Decimal::from(MIN_QUANTITY) {
                    MIN_QUANTITY
                } else {
                    whole.to_u32().unwrap_or(u32::MAX)
                };
                Measure::quantity(qty)
            }
            ItemKind::Service => Measure::weight(value),
        }
    }

    /// The measure after one more add of the same item.
    pub fn incremented(self) -> Self {
        match self {
            Measure::Quantity(qty) => Measure::quantity(qty.saturating_add(QUANTITY_STEP)),
            Measure::Weight(kg) => Measure::weight(kg.checked_add(WEIGHT_STEP_KG).unwrap_or(kg)),
        }
    }

    /// The kind of item this measure belongs to.
    pub fn kind(&self) -> ItemKind {
        match self {
            Measure::Quantity(_) => ItemKind::Product,
            Measure::Weight(_) => ItemKind::Service,
        }
    }

    /// The measure as a decimal number (quantity or kilograms).
    pub fn value(&self) -> Decimal {
        match self {
            Measure::Quantity(qty) => Decimal::from(*qty),
            Measure::Weight(kg) => *kg,
        }
    }

    /// `unit_price × measure`, in whole Rupiah.
    pub fn price(&self, unit_price: Money) -> Money {
        match self {
            Measure::Quantity(qty) => unit_price.multiply_quantity(i64::from(*qty)),
            Measure::Weight(kg) => unit_price.multiply_weight(*kg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimums() {
        assert_eq!(Measure::minimum(ItemKind::Product), Measure::Quantity(1));
        assert_eq!(
            Measure::minimum(ItemKind::Service),
            Measure::Weight(Decimal::new(5, 1))
        );
    }

    #[test]
    fn test_clamping() {
        assert_eq!(Measure::quantity(0), Measure::Quantity(1));
        assert_eq!(Measure::weight(Decimal::new(1, 1)), Measure::Weight(Decimal::new(5, 1)));
        assert_eq!(Measure::weight(Decimal::new(-3, 0)), Measure::Weight(Decimal::new(5, 1)));
        assert_eq!(
            Measure::from_decimal(ItemKind::Product, Decimal::new(-4, 0)),
            Measure::Quantity(1)
        );
        assert_eq!(
            Measure::from_decimal(ItemKind::Product, Decimal::new(27, 1)),
            Measure::Quantity(2)
        );
    }

    #[test]
    fn test_increment() {
        assert_eq!(Measure::Quantity(1).incremented(), Measure::Quantity(2));
        assert_eq!(
            Measure::weight(Decimal::new(5, 1)).incremented(),
            Measure::Weight(Decimal::ONE)
        );
    }

    #[test]
    fn test_increment_saturates() {
        assert_eq!(Measure::Quantity(u32::MAX).incremented(), Measure::Quantity(u32::MAX));
        assert_eq!(
            Measure::Weight(Decimal::MAX).incremented(),
            Measure::Weight(Decimal::MAX)
        );
    }

    #[test]
    fn test_price() {
        let per_kg = Money::from_rupiah(8_000);
        assert_eq!(Measure::weight(Decimal::new(15, 1)).price(per_kg).rupiah(), 12_000);
        assert_eq!(Measure::quantity(3).price(Money::from_rupiah(15_000)).rupiah(), 45_000);
    }

    #[test]
    fn test_kind() {
        assert_eq!(Measure::Quantity(2).kind(), ItemKind::Product);
        assert_eq!(Measure::weight(Decimal::ONE).kind(), ItemKind::Service);
    }
}
