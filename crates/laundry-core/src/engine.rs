//! # Cart Pricing Engine
//!
//! Ties a [`Cart`] to the two external tables it reads from: the catalog and
//! the promo directory. The engine holds the lookups; the caller holds the
//! cart and passes it into every call.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Cashier UI ──(product_id, variation_id)──► CartPricingEngine          │
//! │                                                 │                       │
//! │                         CatalogLookup ◄─────────┤  resolve entry        │
//! │                         PromoLookup   ◄─────────┤  resolve promo        │
//! │                                                 ▼                       │
//! │                                            &mut Cart                    │
//! │                                                 │                       │
//! │   Order service ◄──── OrderPayload ◄── checkout ┘                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::cart::{AddOutcome, Cart, CartTotals};
use crate::catalog::CatalogLookup;
use crate::error::{CartError, CartResult};
use crate::order::OrderPayload;
use crate::promo::{PromoCode, PromoLookup};
use crate::validation::validate_amount;

/// Pricing operations over a caller-owned [`Cart`].
///
/// ## Example
/// ```rust
/// use laundry_core::cart::Cart;
/// use laundry_core::catalog::{Catalog, CatalogEntry};
/// use laundry_core::engine::CartPricingEngine;
/// use laundry_core::money::Money;
/// use laundry_core::promo::{PromoCode, PromoDirectory};
///
/// let catalog: Catalog = vec![
///     CatalogEntry::product("setrika", "STR", "Setrika Kemeja", Money::from_rupiah(15_000)),
///     CatalogEntry::service("ck", "CK", "Cuci Kering", Money::from_rupiah(8_000)),
/// ]
/// .into_iter()
/// .collect();
/// let promos: PromoDirectory =
///     vec![PromoCode::fixed_amount("POTONG5K", Money::from_rupiah(5_000))].into_iter().collect();
///
/// let engine = CartPricingEngine::new(catalog, promos);
/// let mut cart = Cart::new();
///
/// engine.add_item(&mut cart, "setrika", None)?;
/// engine.add_item(&mut cart, "ck", None)?;
/// engine.apply_promo(&mut cart, "potong5k")?;
///
/// assert_eq!(engine.totals(&cart).total.rupiah(), 14_000);
/// # Ok::<(), laundry_core::CartError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CartPricingEngine<C, P> {
    catalog: C,
    promos: P,
}

impl<C, P> CartPricingEngine<C, P>
where
    C: CatalogLookup,
    P: PromoLookup,
{
    /// Creates an engine over the given lookups.
    pub fn new(catalog: C, promos: P) -> Self {
        CartPricingEngine { catalog, promos }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn promos(&self) -> &P {
        &self.promos
    }

    /// Adds a product or service to the cart by id.
    ///
    /// ## Errors
    /// - [`CartError::ProductNotFound`] if the catalog has no such entry
    /// - [`CartError::VariationNotFound`] if `variation_id` is not one of
    ///   the entry's variations
    /// - [`CartError::Validation`] if the catalog prices the selection below zero
    ///
    /// A missing variation on an entry that needs one is not an error: the
    /// cart is left alone and [`AddOutcome::VariationRequired`] is returned.
    pub fn add_item(
        &self,
        cart: &mut Cart,
        product_id: &str,
        variation_id: Option<&str>,
    ) -> CartResult<AddOutcome> {
        let entry = self
            .catalog
            .find_entry(product_id)
            .ok_or_else(|| CartError::ProductNotFound(product_id.to_string()))?;

        let variation = match variation_id {
            Some(variation_id) => Some(entry.variation(variation_id).ok_or_else(|| {
                CartError::VariationNotFound {
                    product_id: product_id.to_string(),
                    variation_id: variation_id.to_string(),
                }
            })?),
            None => None,
        };

        let price = variation.and_then(|v| v.unit_price).unwrap_or(entry.unit_price);
        validate_amount("unit price", price)?;

        Ok(cart.add_item(&entry, variation))
    }

    /// See [`Cart::update_item`].
    pub fn update_item(&self, cart: &mut Cart, id: &str, measure: Decimal) -> bool {
        cart.update_item(id, measure)
    }

    /// See [`Cart::remove_item`].
    pub fn remove_item(&self, cart: &mut Cart, id: &str) -> bool {
        cart.remove_item(id)
    }

    /// Applies a promo code through this engine's promo directory.
    pub fn apply_promo(&self, cart: &mut Cart, code: &str) -> CartResult<PromoCode> {
        cart.apply_promo(code, &self.promos)
    }

    /// See [`Cart::remove_promo`].
    pub fn remove_promo(&self, cart: &mut Cart, id: &str) -> bool {
        cart.remove_promo(id)
    }

    /// See [`Cart::totals`].
    pub fn totals(&self, cart: &Cart) -> CartTotals {
        cart.totals()
    }

    /// Snapshots the cart for the order service.
    ///
    /// The cart is not cleared here: clear it once the order service has
    /// accepted the payload, so a failed submission can be retried.
    pub fn checkout(&self, cart: &Cart) -> OrderPayload {
        let payload = OrderPayload::from_cart(cart);
        debug!(
            draft_id = %payload.draft_id,
            total = payload.total.rupiah(),
            "checkout payload built"
        );
        payload
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
