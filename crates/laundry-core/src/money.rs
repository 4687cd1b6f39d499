//! # Money Module
//!
//! Provides the `Money` type for monetary values and `DiscountRate` for
//! percentage promos.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rupiah has no fractional sub-unit in practice.                         │
//! │                                                                         │
//! │  Every amount is a whole number of Rupiah held in an i64:               │
//! │    Rp 15.000 → Money(15_000)                                            │
//! │                                                                         │
//! │  Anything that can produce a fraction (0.5 kg × Rp 8.001, 12.5% off)    │
//! │  is rounded back to whole Rupiah, half away from zero, at the point     │
//! │  where it happens. Nothing downstream ever sees a fraction.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use laundry_core::money::{DiscountRate, Money};
//!
//! let price = Money::from_rupiah(15_000);
//! let doubled = price * 2;
//! assert_eq!(doubled.rupiah(), 30_000);
//!
//! let off = doubled.percentage(DiscountRate::from_percent(10));
//! assert_eq!(off.rupiah(), 3_000);
//! assert_eq!(doubled.to_string(), "Rp 30.000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use ts_rs::TS;

/// Default currency symbol used by `Display`.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "Rp";

// =============================================================================
// Discount Rate
// =============================================================================

/// Percentage discount represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 1000 bps = 10% and 10000 bps = 100%.
/// Keeping the rate integral lets fractional promos (12.5%) stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// The largest valid rate: 100%.
    pub const MAX_BPS: u32 = 10_000;

    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a rate from a whole percentage (10 → 10%).
    #[inline]
    pub const fn from_percent(percent: u32) -> Self {
        DiscountRate(percent.saturating_mul(100))
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percent(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// True for rates between 0% and 100% inclusive.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0 <= Self::MAX_BPS
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "{}%", self.0 / 100)
        } else {
            write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
        }
    }
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole Rupiah.
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction can go negative before a caller clamps it
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serializes as a plain number** so the front end can do its own display
///
/// ## Where Money is Used
/// ```text
/// CatalogEntry.unit_price ──► LineItem.unit_price ──► LineItem.subtotal
///                                                          │
///                                    Cart subtotal ◄───────┘
///                                         │
///                      PromoKind discount ┤
///                                         ▼
///                                    Cart total ──► OrderPayload.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole Rupiah.
    ///
    /// ```rust
    /// use laundry_core::money::Money;
    ///
    /// let price = Money::from_rupiah(8_000);
    /// assert_eq!(price.rupiah(), 8_000);
    /// ```
    #[inline]
    pub const fn from_rupiah(rupiah: i64) -> Self {
        Money(rupiah)
    }

    /// Returns the value in whole Rupiah.
    #[inline]
    pub const fn rupiah(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Floors the value at zero.
    ///
    /// ```rust
    /// use laundry_core::money::Money;
    ///
    /// let short = Money::from_rupiah(10_000) - Money::from_rupiah(50_000);
    /// assert_eq!(short.clamp_non_negative(), Money::zero());
    /// ```
    #[inline]
    pub const fn clamp_non_negative(&self) -> Self {
        if self.0 < 0 {
            Money(0)
        } else {
            *self
        }
    }

    /// Multiplies money by a whole quantity.
    ///
    /// ```rust
    /// use laundry_core::money::Money;
    ///
    /// let unit_price = Money::from_rupiah(15_000);
    /// assert_eq!(unit_price.multiply_quantity(3).rupiah(), 45_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Multiplies a per-kilogram price by a weight.
    ///
    /// The product is rounded to whole Rupiah, half away from zero, and
    /// saturates at the i64 bounds.
    ///
    /// ```rust
    /// use laundry_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let per_kg = Money::from_rupiah(8_000);
    /// let half_kg = Decimal::new(5, 1);
    /// assert_eq!(per_kg.multiply_weight(half_kg).rupiah(), 4_000);
    ///
    /// // 0.5 × 7_001 = 3_500.5 → 3_501
    /// assert_eq!(Money::from_rupiah(7_001).multiply_weight(half_kg).rupiah(), 3_501);
    /// ```
    pub fn multiply_weight(&self, kg: Decimal) -> Self {
        let Some(product) = Decimal::from(self.0).checked_mul(kg) else {
            return if self.is_negative() != kg.is_sign_negative() {
                Money(i64::MIN)
            } else {
                Money(i64::MAX)
            };
        };

        let rounded = product.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        match rounded.to_i64() {
            Some(value) => Money(value),
            None if rounded.is_sign_negative() => Money(i64::MIN),
            None => Money(i64::MAX),
        }
    }

    /// Returns `rate` percent of this amount.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`, where the +5000
    /// rounds a half Rupiah up.
    ///
    /// ```rust
    /// use laundry_core::money::{DiscountRate, Money};
    ///
    /// let subtotal = Money::from_rupiah(100_000);
    /// assert_eq!(subtotal.percentage(DiscountRate::from_percent(20)).rupiah(), 20_000);
    ///
    /// // 12.5% of 1_001 = 125.125 → 125
    /// assert_eq!(Money::from_rupiah(1_001).percentage(DiscountRate::from_bps(1_250)).rupiah(), 125);
    /// ```
    pub fn percentage(&self, rate: DiscountRate) -> Money {
        let amount = (i128::from(self.0) * i128::from(rate.bps()) + 5_000) / 10_000;
        Money(i64::try_from(amount).unwrap_or(i64::MAX))
    }

    /// Formats the amount with Indonesian digit grouping and a custom
    /// currency symbol.
    ///
    /// ```rust
    /// use laundry_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupiah(1_250_000).format_with_symbol("IDR"), "IDR 1.250.000");
    /// assert_eq!(Money::from_rupiah(-5_000).format_with_symbol("Rp"), "-Rp 5.000");
    /// ```
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{} {}", sign, symbol, group_thousands(self.0.unsigned_abs()))
    }
}

/// Inserts `.` between every group of three digits (id-ID convention).
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    grouped
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money the way the cashier screen does: `Rp 15.000`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(DEFAULT_CURRENCY_SYMBOL))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_rupiah(15_000).to_string(), "Rp 15.000");
        assert_eq!(Money::from_rupiah(500).to_string(), "Rp 500");
        assert_eq!(Money::from_rupiah(1_000_000).to_string(), "Rp 1.000.000");
        assert_eq!(Money::from_rupiah(-5_000).to_string(), "-Rp 5.000");
        assert_eq!(Money::zero().to_string(), "Rp 0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupiah(15_000);
        let b = Money::from_rupiah(4_000);

        assert_eq!((a + b).rupiah(), 19_000);
        assert_eq!((a - b).rupiah(), 11_000);
        assert_eq!((a * 3).rupiah(), 45_000);

        let total: Money = [a, b, b].iter().sum();
        assert_eq!(total.rupiah(), 23_000);
    }

    #[test]
    fn test_multiply_weight() {
        let per_kg = Money::from_rupiah(8_000);
        assert_eq!(per_kg.multiply_weight(Decimal::new(5, 1)).rupiah(), 4_000);
        assert_eq!(per_kg.multiply_weight(Decimal::new(25, 1)).rupiah(), 20_000);
        assert_eq!(per_kg.multiply_weight(Decimal::ZERO).rupiah(), 0);
    }

    #[test]
    fn test_multiply_weight_rounds_half_away_from_zero() {
        // 7_001 × 0.5 = 3_500.5
        let price = Money::from_rupiah(7_001);
        assert_eq!(price.multiply_weight(Decimal::new(5, 1)).rupiah(), 3_501);
        // 7_001 × 1.5 = 10_501.5
        assert_eq!(price.multiply_weight(Decimal::new(15, 1)).rupiah(), 10_502);
    }

    #[test]
    fn test_percentage() {
        let subtotal = Money::from_rupiah(100_000);
        assert_eq!(subtotal.percentage(DiscountRate::from_percent(10)).rupiah(), 10_000);
        assert_eq!(subtotal.percentage(DiscountRate::from_percent(100)).rupiah(), 100_000);
        assert_eq!(subtotal.percentage(DiscountRate::zero()).rupiah(), 0);
    }

    #[test]
    fn test_clamp_non_negative() {
        assert_eq!(Money::from_rupiah(-1).clamp_non_negative(), Money::zero());
        assert_eq!(
            Money::from_rupiah(10).clamp_non_negative(),
            Money::from_rupiah(10)
        );
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let negative = Money::from_rupiah(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().rupiah(), 100);
    }

    #[test]
    fn test_discount_rate() {
        let rate = DiscountRate::from_percent(10);
        assert_eq!(rate.bps(), 1_000);
        assert!((rate.percent() - 10.0).abs() < f64::EPSILON);
        assert_eq!(rate.to_string(), "10%");
        assert_eq!(DiscountRate::from_bps(1_250).to_string(), "12.50%");

        assert!(DiscountRate::from_percent(100).is_valid());
        assert!(!DiscountRate::from_bps(10_001).is_valid());
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&Money::from_rupiah(15_000)).unwrap();
        assert_eq!(json, "15000");
    }
}
