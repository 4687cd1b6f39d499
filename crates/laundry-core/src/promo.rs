//! # Promotions
//!
//! Promo codes and the [`PromoLookup`] seam that resolves them.
//!
//! ## Discount Stacking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Promos are ADDITIVE against the original subtotal, never compounded.   │
//! │                                                                         │
//! │  subtotal = Rp 100.000, promos = [10%, 20%]                             │
//! │                                                                         │
//! │    10% of 100.000 = 10.000                                              │
//! │    20% of 100.000 = 20.000      (not 20% of 90.000)                     │
//! │    discount       = 30.000                                              │
//! │    total          = 70.000                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{DiscountRate, Money};

// =============================================================================
// Promo Kind
// =============================================================================

/// How a promo reduces the cart total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PromoKind {
    /// A percentage of the cart subtotal.
    Percentage { rate: DiscountRate },
    /// A fixed Rupiah amount off the cart.
    FixedAmount { amount: Money },
}

// =============================================================================
// Promo Code
// =============================================================================

/// A discount applied to the whole cart.
///
/// `code` is always stored normalised (trimmed, uppercase) and doubles as
/// the promo's id within a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PromoCode {
    pub code: String,
    pub kind: PromoKind,
}

impl PromoCode {
    /// A percentage promo; `percent` is a whole number (10 → 10%).
    pub fn percentage(code: &str, percent: u32) -> Self {
        PromoCode {
            code: normalize(code),
            kind: PromoKind::Percentage {
                rate: DiscountRate::from_percent(percent),
            },
        }
    }

    /// A fixed-amount promo.
    pub fn fixed_amount(code: &str, amount: Money) -> Self {
        PromoCode {
            code: normalize(code),
            kind: PromoKind::FixedAmount { amount },
        }
    }

    /// The promo's id inside a cart.
    #[inline]
    pub fn id(&self) -> &str {
        &self.code
    }

    /// Whether `code` names this promo, ignoring case and surrounding spaces.
    pub fn matches(&self, code: &str) -> bool {
        self.code == normalize(code)
    }

    /// How much this promo takes off `subtotal`.
    ///
    /// ```rust
    /// use laundry_core::money::Money;
    /// use laundry_core::promo::PromoCode;
    ///
    /// let subtotal = Money::from_rupiah(100_000);
    /// assert_eq!(PromoCode::percentage("HEMAT10", 10).discount_on(subtotal).rupiah(), 10_000);
    /// assert_eq!(
    ///     PromoCode::fixed_amount("POTONG5K", Money::from_rupiah(5_000)).discount_on(subtotal).rupiah(),
    ///     5_000,
    /// );
    /// ```
    pub fn discount_on(&self, subtotal: Money) -> Money {
        match self.kind {
            PromoKind::Percentage { rate } => subtotal.percentage(rate),
            PromoKind::FixedAmount { amount } => amount,
        }
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}

// =============================================================================
// Promo Lookup
// =============================================================================

/// Resolves a promo code to its definition.
///
/// The cart always passes a normalised (trimmed, uppercase) code. Implemented
/// by [`PromoDirectory`] and by any `Fn(&str) -> Option<PromoCode>`, so a
/// promotions service client can replace the static table.
pub trait PromoLookup {
    /// Returns the promo for `code`, or `None` if it is unknown.
    fn find_promo(&self, code: &str) -> Option<PromoCode>;
}

impl<F> PromoLookup for F
where
    F: Fn(&str) -> Option<PromoCode>,
{
    fn find_promo(&self, code: &str) -> Option<PromoCode> {
        self(code)
    }
}

/// In-memory promo table keyed by normalised code.
#[derive(Debug, Clone, Default)]
pub struct PromoDirectory {
    promos: HashMap<String, PromoCode>,
}

impl PromoDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a promo. Returns the promo it replaced, if any.
    pub fn insert(&mut self, promo: PromoCode) -> Option<PromoCode> {
        let promo = PromoCode {
            code: normalize(&promo.code),
            ..promo
        };
        self.promos.insert(promo.code.clone(), promo)
    }

    pub fn len(&self) -> usize {
        self.promos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.promos.is_empty()
    }

    /// Known codes, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.promos.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

impl FromIterator<PromoCode> for PromoDirectory {
    fn from_iter<I: IntoIterator<Item = PromoCode>>(iter: I) -> Self {
        let mut directory = PromoDirectory::new();
        for promo in iter {
            directory.insert(promo);
        }
        directory
    }
}

impl PromoLookup for PromoDirectory {
    fn find_promo(&self, code: &str) -> Option<PromoCode> {
        self.promos.get(&normalize(code)).cloned()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
