//! # laundry-core: Cart Pricing for the Laundry Cashier
//!
//! The pricing logic behind the cashier screen: a cart of products and
//! weight-based services, promo codes, and the totals shown to the customer.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Laundry POS Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Cashier Web Front End                        │   │
//! │  │   Catalog grid ──► Cart panel ──► Promo input ──► Checkout      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ laundry-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │ catalog │ │  cart   │ │  promo  │ │  money  │ │  order  │  │   │
//! │  │   │ Lookup  │ │LineItem │ │ Lookup  │ │  Money  │ │ Payload │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                    engine: CartPricingEngine                    │   │
//! │  │                                                                 │   │
//! │  │   NO DATABASE • NO NETWORK • DETERMINISTIC TOTALS               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ OrderPayload (JSON)                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        External services: inventory, promotions, orders         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - Cart, LineItem, CartTotals
//! - [`engine`] - CartPricingEngine over injected lookups
//! - [`catalog`] - Catalog entries, variations, SKU generation
//! - [`promo`] - Promo codes and the promo directory
//! - [`money`] - Whole-Rupiah Money and percentage rates
//! - [`measure`] - Quantity / weight with clamping
//! - [`order`] - Snapshot handed to the order service
//! - [`config`] - TOML configuration
//! - [`validation`] - Input validation
//! - [`error`] - Error types
//! - [`telemetry`] - Tracing subscriber setup for hosts
//!
//! ## Example Usage
//!
//! ```rust
//! use laundry_core::{Cart, CatalogEntry, Money, PromoCode, PromoDirectory};
//!
//! let promos: PromoDirectory =
//!     vec![PromoCode::percentage("HEMAT10", 10), PromoCode::percentage("HEMAT20", 20)]
//!         .into_iter()
//!         .collect();
//! let bed_cover = CatalogEntry::product("bc", "BC", "Bed Cover", Money::from_rupiah(100_000));
//!
//! let mut cart = Cart::new();
//! cart.add_item(&bed_cover, None);
//! cart.apply_promo("hemat10", &promos)?;
//! cart.apply_promo("hemat20", &promos)?;
//!
//! // Promos add up against the original subtotal: 10% + 20% = 30%.
//! let totals = cart.totals();
//! assert_eq!(totals.discount.rupiah(), 30_000);
//! assert_eq!(totals.total.to_string(), "Rp 70.000");
//! # Ok::<(), laundry_core::CartError>(())
//! ```

use rust_decimal::Decimal;

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod measure;
pub mod money;
pub mod order;
pub mod promo;
pub mod telemetry;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{AddOutcome, Cart, CartTotals, LineItem};
pub use catalog::{Catalog, CatalogEntry, CatalogLookup, ItemKind, Variation};
pub use config::PricingConfig;
pub use engine::CartPricingEngine;
pub use error::{CartError, ConfigError, ValidationError};
pub use measure::Measure;
pub use money::{DiscountRate, Money};
pub use order::OrderPayload;
pub use promo::{PromoCode, PromoDirectory, PromoKind, PromoLookup};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest quantity a product line can hold.
pub const MIN_QUANTITY: u32 = 1;

/// Quantity added when a product is added again.
pub const QUANTITY_STEP: u32 = 1;

/// Smallest weight a service line can hold: 0.5 kg.
pub const MIN_WEIGHT_KG: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Weight added when a service is added again: 0.5 kg.
pub const WEIGHT_STEP_KG: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Longest promo code accepted in configuration.
pub const MAX_PROMO_CODE_LEN: usize = 32;
