//! # Cart
//!
//! The cashier's cart: line items, applied promos, and the totals derived
//! from them.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Cashier Action           Cart Method            State Change           │
//! │  ──────────────           ───────────            ────────────           │
//! │                                                                         │
//! │  Click product/service ──► add_item() ─────────► push or increment     │
//! │                                                                         │
//! │  Change qty / weight ────► update_item() ──────► clamp, recompute      │
//! │                                                                         │
//! │  Click remove ───────────► remove_item() ──────► retain (no-op if gone)│
//! │                                                                         │
//! │  Enter promo code ───────► apply_promo() ──────► push or Err           │
//! │                                                                         │
//! │  Remove promo ───────────► remove_promo() ─────► retain                │
//! │                                                                         │
//! │  Order submitted/cancel ─► clear() ────────────► empty                 │
//! │                                                                         │
//! │  Render totals ──────────► totals() ───────────► (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - One line per `(product, variation)` pair; repeated adds increment it
//! - `line.subtotal == line.unit_price × line.measure` after every mutation
//! - Quantity never below 1, weight never below 0.5 kg (clamped)
//! - A promo code appears at most once
//! - Subtotal, discount and total are always derived, never stored

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use crate::catalog::{CatalogEntry, ItemKind, Variation};
use crate::error::{CartError, CartResult};
use crate::measure::Measure;
use crate::money::Money;
use crate::promo::{PromoCode, PromoKind, PromoLookup};
use crate::validation::{
    normalize_promo_code, validate_amount, validate_discount_rate, ValidationResult,
};

// =============================================================================
// Line Item
// =============================================================================

/// One row in the cart.
///
/// Fields are private so `subtotal` can only change together with
/// `unit_price` or `measure`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    id: String,
    product_id: String,
    variation_id: Option<String>,
    name: String,
    kind: ItemKind,
    unit_price: Money,
    measure: Measure,
    subtotal: Money,
}

/// Cart row id for a selection: `product` or `product_variation`.
///
/// ```rust
/// use laundry_core::cart::line_id;
///
/// assert_eq!(line_id("det", None), "det");
/// assert_eq!(line_id("det", Some("1l")), "det_1l");
/// ```
pub fn line_id(product_id: &str, variation_id: Option<&str>) -> String {
    match variation_id {
        Some(variation_id) => format!("{}_{}", product_id, variation_id),
        None => product_id.to_string(),
    }
}

impl LineItem {
    /// A fresh line at the kind's minimum measure.
    fn new(entry: &CatalogEntry, variation: Option<&Variation>) -> Self {
        let name = match variation {
            Some(v) => format!("{} ({})", entry.name, v.name),
            None => entry.name.clone(),
        };
        let unit_price = entry.price_for(variation);
        let measure = Measure::minimum(entry.kind);

        LineItem {
            id: line_id(&entry.id, variation.map(|v| v.id.as_str())),
            product_id: entry.id.clone(),
            variation_id: variation.map(|v| v.id.clone()),
            name,
            kind: entry.kind,
            unit_price,
            measure,
            subtotal: measure.price(unit_price),
        }
    }

    /// The only way `measure` changes.
    fn set_measure(&mut self, measure: Measure) {
        debug_assert_eq!(measure.kind(), self.kind);
        self.measure = measure;
        self.subtotal = measure.price(self.unit_price);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn variation_id(&self) -> Option<&str> {
        self.variation_id.as_deref()
    }

    /// Display name, with the variation in parentheses.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn measure(&self) -> Measure {
        self.measure
    }

    /// `unit_price × measure`.
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }
}

// =============================================================================
// Add Outcome
// =============================================================================

/// What `add_item` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    /// A new line was inserted at the minimum measure.
    Added,
    /// An existing line grew by one step.
    Incremented,
    /// The entry needs a variation and none was given. Nothing changed.
    VariationRequired,
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Totals summary for the cashier screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub subtotal: Money,
    pub discount: Money,
    /// `max(0, subtotal - discount)`.
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        cart.totals()
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The cart for one cashier session.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<LineItem>,
    promos: Vec<PromoCode>,
    /// When the cart was created or last cleared.
    #[ts(as = "String")]
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            promos: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Applied promos in application order.
    pub fn promos(&self) -> &[PromoCode] {
        &self.promos
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Finds a line by id.
    pub fn get_item(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Adds a catalog selection, or bumps its line if already present.
    ///
    /// ## Behavior
    /// - Entry has variations but `variation` is `None`: nothing happens,
    ///   returns [`AddOutcome::VariationRequired`]
    /// - Variation that is not one of the entry's: treated as no selection
    /// - Line already in cart: quantity +1 / weight +0.5 kg
    /// - Otherwise: new line at quantity 1 / weight 0.5 kg
    ///
    /// ```rust
    /// use laundry_core::cart::{AddOutcome, Cart};
    /// use laundry_core::catalog::CatalogEntry;
    /// use laundry_core::money::Money;
    ///
    /// let wash = CatalogEntry::service("ck", "CK", "Cuci Kering", Money::from_rupiah(8_000));
    /// let mut cart = Cart::new();
    ///
    /// assert_eq!(cart.add_item(&wash, None), AddOutcome::Added);
    /// assert_eq!(cart.add_item(&wash, None), AddOutcome::Incremented);
    /// assert_eq!(cart.subtotal().rupiah(), 8_000); // 1 kg
    /// ```
    pub fn add_item(&mut self, entry: &CatalogEntry, variation: Option<&Variation>) -> AddOutcome {
        // Only the entry's own variations count as a selection.
        let variation = variation.and_then(|v| entry.variation(&v.id));

        if entry.has_variations() && variation.is_none() {
            debug!(product_id = %entry.id, "add_item declined: variation required");
            return AddOutcome::VariationRequired;
        }

        let id = line_id(&entry.id, variation.map(|v| v.id.as_str()));

        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            let measure = item.measure.incremented();
            item.set_measure(measure);
            debug!(line_id = %id, measure = ?item.measure, "add_item incremented line");
            return AddOutcome::Incremented;
        }

        let item = LineItem::new(entry, variation);
        debug!(line_id = %id, unit_price = item.unit_price.rupiah(), "add_item added line");
        self.items.push(item);
        AddOutcome::Added
    }

    /// Sets a line's quantity (products) or weight in kg (services).
    ///
    /// Values below the minimum clamp up to it; products keep only the
    /// integer part. Returns `false` if no line has this id.
    pub fn update_item(&mut self, id: &str, measure: Decimal) -> bool {
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            debug!(line_id = %id, "update_item: no such line");
            return false;
        };

        let measure = Measure::from_decimal(item.kind, measure);
        item.set_measure(measure);
        debug!(line_id = %id, measure = ?measure, "update_item");
        true
    }

    /// [`Cart::update_item`] for a whole quantity.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) -> bool {
        self.update_item(id, Decimal::from(quantity))
    }

    /// [`Cart::update_item`] for a weight in kilograms.
    pub fn update_weight(&mut self, id: &str, kg: Decimal) -> bool {
        self.update_item(id, kg)
    }

    /// Removes a line. Returns whether anything was removed.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        let removed = self.items.len() != before;
        debug!(line_id = %id, removed, "remove_item");
        removed
    }

    /// Applies a promo code resolved through `lookup`.
    ///
    /// ## Errors
    /// The cart is unchanged on every error.
    /// - Blank code: [`CartError::Validation`]
    /// - Code already on the cart: [`CartError::PromoAlreadyApplied`]
    /// - `lookup` does not know the code: [`CartError::InvalidPromoCode`]
    /// - `lookup` returns a percentage over 100% or a negative amount:
    ///   [`CartError::Validation`]
    ///
    /// ```rust
    /// use laundry_core::cart::Cart;
    /// use laundry_core::error::CartError;
    /// use laundry_core::promo::{PromoCode, PromoDirectory};
    ///
    /// let promos: PromoDirectory = vec![PromoCode::percentage("HEMAT10", 10)].into_iter().collect();
    /// let mut cart = Cart::new();
    ///
    /// assert!(cart.apply_promo("hemat10", &promos).is_ok());
    /// assert!(matches!(
    ///     cart.apply_promo("HEMAT10", &promos),
    ///     Err(CartError::PromoAlreadyApplied { .. })
    /// ));
    /// assert!(matches!(
    ///     cart.apply_promo("GRATIS", &promos),
    ///     Err(CartError::InvalidPromoCode { .. })
    /// ));
    /// assert_eq!(cart.promos().len(), 1);
    /// ```
    pub fn apply_promo<L>(&mut self, code: &str, lookup: &L) -> CartResult<PromoCode>
    where
        L: PromoLookup + ?Sized,
    {
        let code = normalize_promo_code(code)?;

        if self.has_promo(&code) {
            debug!(code = %code, "apply_promo rejected: already applied");
            return Err(CartError::PromoAlreadyApplied { code });
        }

        let Some(promo) = lookup.find_promo(&code) else {
            debug!(code = %code, "apply_promo rejected: unknown code");
            return Err(CartError::InvalidPromoCode { code });
        };

        if let Err(err) = validate_promo_kind(&promo.kind) {
            debug!(code = %code, error = %err, "apply_promo rejected: invalid promo value");
            return Err(err.into());
        }

        // The directory may resolve an alias to a canonical code.
        let promo = PromoCode {
            code: promo.code.trim().to_uppercase(),
            ..promo
        };
        if self.has_promo(&promo.code) {
            debug!(code = %promo.code, "apply_promo rejected: already applied");
            return Err(CartError::PromoAlreadyApplied { code: promo.code });
        }

        debug!(code = %promo.code, kind = ?promo.kind, "apply_promo");
        self.promos.push(promo.clone());
        Ok(promo)
    }

    /// Removes a promo by id (its code, case-insensitive).
    /// Returns whether anything was removed.
    pub fn remove_promo(&mut self, id: &str) -> bool {
        let before = self.promos.len();
        self.promos.retain(|p| !p.matches(id));
        let removed = self.promos.len() != before;
        debug!(promo_id = %id, removed, "remove_promo");
        removed
    }

    fn has_promo(&self, code: &str) -> bool {
        self.promos.iter().any(|p| p.matches(code))
    }

    /// Empties the cart and restarts its clock.
    ///
    /// ## When Used
    /// - Cashier cancels the transaction
    /// - After the order service accepted the order
    pub fn clear(&mut self) {
        self.items.clear();
        self.promos.clear();
        self.created_at = Utc::now();
        debug!("cart cleared");
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Units across all product lines.
    pub fn total_quantity(&self) -> u64 {
        self.items
            .iter()
            .map(|i| match i.measure {
                Measure::Quantity(qty) => u64::from(qty),
                Measure::Weight(_) => 0,
            })
            .sum()
    }

    /// Kilograms across all service lines.
    pub fn total_weight(&self) -> Decimal {
        self.items
            .iter()
            .map(|i| match i.measure {
                Measure::Weight(kg) => kg,
                Measure::Quantity(_) => Decimal::ZERO,
            })
            .sum()
    }

    /// Sum of line subtotals.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|i| i.subtotal).sum()
    }

    /// Sum of every promo's discount, each computed on the subtotal.
    pub fn discount(&self) -> Money {
        self.discount_on(self.subtotal())
    }

    /// Subtotal minus discount, floored at zero.
    pub fn total(&self) -> Money {
        self.totals().total
    }

    /// Subtotal, discount and total in one pass.
    pub fn totals(&self) -> CartTotals {
        let subtotal = self.subtotal();
        let discount = self.discount_on(subtotal);

        CartTotals {
            item_count: self.item_count(),
            subtotal,
            discount,
            total: (subtotal - discount).clamp_non_negative(),
        }
    }

    /// Promos stack additively, each on the undiscounted subtotal.
    fn discount_on(&self, subtotal: Money) -> Money {
        self.promos.iter().map(|p| p.discount_on(subtotal)).sum()
    }
}

/// Range check for promos that come from outside the config file.
fn validate_promo_kind(kind: &PromoKind) -> ValidationResult<()> {
    match kind {
        PromoKind::Percentage { rate } => validate_discount_rate(*rate),
        PromoKind::FixedAmount { amount } => validate_amount("promo amount", *amount),
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::promo::PromoDirectory;

    fn ironing() -> CatalogEntry {
        CatalogEntry::product("setrika", "STR", "Setrika Kemeja", Money::from_rupiah(15_000))
    }

    fn wash() -> CatalogEntry {
        CatalogEntry::service("ck", "CK", "Cuci Kering", Money::from_rupiah(8_000))
    }

    fn detergent() -> CatalogEntry {
        CatalogEntry::product("det", "DET", "Deterjen", Money::from_rupiah(12_000))
            .with_variation(Variation::new("500ml", "500 ml"))
            .with_variation(Variation::new("1l", "1 L").with_price(Money::from_rupiah(20_000)))
    }

    fn promos() -> PromoDirectory {
        vec![
            PromoCode::percentage("HEMAT10", 10),
            PromoCode::percentage("HEMAT20", 20),
            PromoCode::fixed_amount("POTONG5K", Money::from_rupiah(5_000)),
            PromoCode::fixed_amount("POTONG50K", Money::from_rupiah(50_000)),
        ]
        .into_iter()
        .collect()
    }

    fn assert_subtotals_consistent(cart: &Cart) {
        for item in cart.items() {
            assert_eq!(item.subtotal(), item.measure().price(item.unit_price()));
        }
    }

    #[test]
    fn test_repeated_adds_aggregate_into_one_line() {
        let mut cart = Cart::new();
        let product = ironing();

        assert_eq!(cart.add_item(&product, None), AddOutcome::Added);
        assert_eq!(cart.add_item(&product, None), AddOutcome::Incremented);
        assert_eq!(cart.add_item(&product, None), AddOutcome::Incremented);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].measure(), Measure::Quantity(3));
        assert_eq!(cart.items()[0].subtotal().rupiah(), 45_000);
        assert_eq!(cart.total_quantity(), 3);
        assert_subtotals_consistent(&cart);
    }

    #[test]
    fn test_service_adds_in_half_kilo_steps() {
        let mut cart = Cart::new();
        let service = wash();

        cart.add_item(&service, None);
        assert_eq!(cart.items()[0].measure(), Measure::Weight(Decimal::new(5, 1)));
        assert_eq!(cart.items()[0].subtotal().rupiah(), 4_000);

        cart.add_item(&service, None);
        cart.add_item(&service, None);
        assert_eq!(cart.items()[0].measure(), Measure::Weight(Decimal::new(15, 1)));
        assert_eq!(cart.total_weight(), Decimal::new(15, 1));
        assert_eq!(cart.subtotal().rupiah(), 12_000);
        assert_subtotals_consistent(&cart);
    }

    #[test]
    fn test_variation_required_is_noop() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_item(&detergent(), None), AddOutcome::VariationRequired);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_variations_get_distinct_lines() {
        let mut cart = Cart::new();
        let entry = detergent();
        let small = entry.variation("500ml").cloned();
        let large = entry.variation("1l").cloned();

        cart.add_item(&entry, small.as_ref());
        cart.add_item(&entry, large.as_ref());
        cart.add_item(&entry, large.as_ref());

        assert_eq!(cart.item_count(), 2);
        let large_line = cart.get_item("det_1l").unwrap();
        assert_eq!(large_line.name(), "Deterjen (1 L)");
        assert_eq!(large_line.variation_id(), Some("1l"));
        assert_eq!(large_line.measure(), Measure::Quantity(2));
        assert_eq!(large_line.subtotal().rupiah(), 40_000);
        assert_eq!(cart.get_item("det_500ml").unwrap().subtotal().rupiah(), 12_000);
    }

    #[test]
    fn test_update_item_clamps() {
        let mut cart = Cart::new();
        cart.add_item(&wash(), None);
        cart.add_item(&ironing(), None);

        assert!(cart.update_item("ck", Decimal::new(1, 1)));
        assert_eq!(cart.get_item("ck").unwrap().measure(), Measure::Weight(Decimal::new(5, 1)));

        assert!(cart.update_quantity("setrika", 0));
        assert_eq!(cart.get_item("setrika").unwrap().measure(), Measure::Quantity(1));
        assert_subtotals_consistent(&cart);
    }

    #[test]
    fn test_update_item_recomputes_subtotal() {
        let mut cart = Cart::new();
        cart.add_item(&wash(), None);
        cart.add_item(&ironing(), None);

        assert!(cart.update_weight("ck", Decimal::new(32, 1)));
        assert_eq!(cart.get_item("ck").unwrap().subtotal().rupiah(), 25_600);

        assert!(cart.update_item("setrika", Decimal::new(4, 0)));
        assert_eq!(cart.get_item("setrika").unwrap().subtotal().rupiah(), 60_000);
        assert_subtotals_consistent(&cart);
    }

    #[test]
    fn test_update_missing_item_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&ironing(), None);
        let before = cart.items().to_vec();

        assert!(!cart.update_item("missing", Decimal::TEN));
        assert_eq!(cart.items(), before.as_slice());
    }

    #[test]
    fn test_remove_missing_ids_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add_item(&ironing(), None);
        cart.add_item(&wash(), None);
        cart.apply_promo("HEMAT10", &promos()).unwrap();
        let items = cart.items().to_vec();
        let applied = cart.promos().to_vec();

        assert!(!cart.remove_item("missing"));
        assert!(!cart.remove_promo("MISSING"));

        assert_eq!(cart.items(), items.as_slice());
        assert_eq!(cart.promos(), applied.as_slice());
    }

    #[test]
    fn test_remove_item_and_promo() {
        let mut cart = Cart::new();
        cart.add_item(&ironing(), None);
        cart.add_item(&wash(), None);
        cart.apply_promo("HEMAT10", &promos()).unwrap();

        assert!(cart.remove_item("setrika"));
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].id(), "ck");

        assert!(cart.remove_promo("hemat10"));
        assert!(cart.promos().is_empty());
    }

    #[test]
    fn test_duplicate_promo_rejected() {
        let mut cart = Cart::new();
        let directory = promos();

        let applied = cart.apply_promo("HEMAT10", &directory).unwrap();
        assert_eq!(applied.code, "HEMAT10");
        assert_eq!(cart.promos().len(), 1);

        let err = cart.apply_promo(" hemat10 ", &directory).unwrap_err();
        assert_eq!(
            err,
            CartError::PromoAlreadyApplied {
                code: "HEMAT10".to_string()
            }
        );
        assert_eq!(err.to_string(), "promo already applied");
        assert_eq!(cart.promos().len(), 1);
    }

    #[test]
    fn test_unknown_and_blank_promo_rejected() {
        let mut cart = Cart::new();

        let err = cart.apply_promo("gratis", &promos()).unwrap_err();
        assert_eq!(err.to_string(), "invalid promo code");
        assert!(matches!(cart.apply_promo("  ", &promos()), Err(CartError::Validation(_))));
        assert!(cart.promos().is_empty());
    }

    #[test]
    fn test_alias_resolving_to_applied_code_rejected() {
        let lookup = |code: &str| match code {
            "HEMAT10" | "SAVE10" => Some(PromoCode::percentage("HEMAT10", 10)),
            _ => None,
        };
        let mut cart = Cart::new();

        cart.apply_promo("SAVE10", &lookup).unwrap();
        assert_eq!(cart.promos()[0].code, "HEMAT10");
        assert!(matches!(
            cart.apply_promo("HEMAT10", &lookup),
            Err(CartError::PromoAlreadyApplied { .. })
        ));
    }

    #[test]
    fn test_out_of_range_promo_values_rejected() {
        let lookup = |code: &str| match code {
            "MEGA" => Some(PromoCode::percentage("MEGA", 150)),
            "MINUS" => Some(PromoCode::fixed_amount("MINUS", Money::from_rupiah(-5_000))),
            "FULL" => Some(PromoCode::percentage("FULL", 100)),
            _ => None,
        };
        let mut cart = Cart::new();
        cart.add_item(
            &CatalogEntry::product("bed", "BED", "Bed Cover", Money::from_rupiah(100_000)),
            None,
        );

        assert!(matches!(
            cart.apply_promo("mega", &lookup),
            Err(CartError::Validation(_))
        ));
        assert!(matches!(
            cart.apply_promo("MINUS", &lookup),
            Err(CartError::Validation(_))
        ));
        assert!(cart.promos().is_empty());
        assert_eq!(cart.discount(), Money::zero());

        cart.apply_promo("FULL", &lookup).unwrap();
        assert_eq!(cart.totals().discount.rupiah(), 100_000);
        assert_eq!(cart.discount(), cart.totals().discount);
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_foreign_variation_ignored() {
        let mut cart = Cart::new();
        let foreign = Variation::new("5kg", "5 kg").with_price(Money::from_rupiah(1));

        assert_eq!(cart.add_item(&detergent(), Some(&foreign)), AddOutcome::VariationRequired);
        assert!(cart.is_empty());

        assert_eq!(cart.add_item(&ironing(), Some(&foreign)), AddOutcome::Added);
        let line = &cart.items()[0];
        assert_eq!(line.id(), "setrika");
        assert_eq!(line.variation_id(), None);
        assert_eq!(line.unit_price().rupiah(), 15_000);
    }

    #[test]
    fn test_add_after_huge_weight_does_not_panic() {
        let mut cart = Cart::new();
        cart.add_item(&wash(), None);
        assert!(cart.update_weight("ck", Decimal::MAX));

        assert_eq!(cart.add_item(&wash(), None), AddOutcome::Incremented);
        assert_eq!(cart.items()[0].measure(), Measure::Weight(Decimal::MAX));
        assert_subtotals_consistent(&cart);
    }

    #[test]
    fn test_promo_on_empty_cart() {
        let mut cart = Cart::new();
        cart.apply_promo("POTONG5K", &promos()).unwrap();

        let totals = cart.totals();
        assert_eq!(totals.subtotal, Money::zero());
        assert_eq!(totals.discount.rupiah(), 5_000);
        assert_eq!(totals.total, Money::zero());
    }

    #[test]
    fn test_total_never_negative() {
        let mut cart = Cart::new();
        let cheap = CatalogEntry::product("p", "P", "Hanger", Money::from_rupiah(10_000));
        cart.add_item(&cheap, None);
        cart.apply_promo("POTONG50K", &promos()).unwrap();

        let totals = cart.totals();
        assert_eq!(totals.subtotal.rupiah(), 10_000);
        assert_eq!(totals.discount.rupiah(), 50_000);
        assert_eq!(totals.total, Money::zero());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_percentage_promos_are_additive() {
        let mut cart = Cart::new();
        let big = CatalogEntry::product("bed", "BED", "Bed Cover", Money::from_rupiah(100_000));
        cart.add_item(&big, None);
        cart.apply_promo("HEMAT10", &promos()).unwrap();
        cart.apply_promo("HEMAT20", &promos()).unwrap();

        let totals = cart.totals();
        assert_eq!(totals.discount.rupiah(), 30_000);
        assert_eq!(totals.total.rupiah(), 70_000);
        assert_eq!(cart.discount(), totals.discount);
    }

    #[test]
    fn test_end_to_end_checkout_totals() {
        let mut cart = Cart::new();

        cart.add_item(&ironing(), None);
        assert_eq!(cart.subtotal().rupiah(), 15_000);

        cart.add_item(&wash(), None);
        assert_eq!(cart.get_item("ck").unwrap().measure(), Measure::Weight(Decimal::new(5, 1)));
        assert_eq!(cart.get_item("ck").unwrap().subtotal().rupiah(), 4_000);
        assert_eq!(cart.subtotal().rupiah(), 19_000);

        cart.apply_promo("POTONG5K", &promos()).unwrap();
        let totals = CartTotals::from(&cart);
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total.rupiah(), 14_000);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&ironing(), None);
        cart.apply_promo("HEMAT10", &promos()).unwrap();

        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.promos().is_empty());
        assert_eq!(cart.totals().total, Money::zero());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add_item(&wash(), None);
        cart.add_item(&ironing(), None);
        cart.add_item(&wash(), None);

        let ids: Vec<&str> = cart.items().iter().map(LineItem::id).collect();
        assert_eq!(ids, vec!["ck", "setrika"]);
    }
}
