//! # Catalog
//!
//! Products and services as the cashier screen sees them, plus the
//! [`CatalogLookup`] seam through which the pricing engine reads them.
//!
//! The source of truth is an external inventory service. This crate only
//! ever sees already-fetched entries, either through the in-memory
//! [`Catalog`] or any closure / client that implements [`CatalogLookup`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_sku, ValidationResult};

// =============================================================================
// Item Kind
// =============================================================================

/// Whether a catalog entry is sold by the unit or by weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Sold per unit (detergent, hangers, plastic bags).
    Product,
    /// Priced per kilogram (wash, dry, iron).
    Service,
}

// =============================================================================
// Variation
// =============================================================================

/// A selectable variant of a catalog entry (size, scent, express).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Variation {
    pub id: String,
    pub name: String,
    /// Explicit SKU; generated from the parent SKU when absent.
    #[serde(default)]
    pub sku: Option<String>,
    /// Overrides the parent entry's unit price when set.
    #[serde(default)]
    pub unit_price: Option<Money>,
}

impl Variation {
    /// Creates a variation that inherits its parent's price.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Variation {
            id: id.into(),
            name: name.into(),
            sku: None,
            unit_price: None,
        }
    }

    /// Sets a price that overrides the parent's.
    pub fn with_price(mut self, price: Money) -> Self {
        self.unit_price = Some(price);
        self
    }

    /// Sets an explicit SKU.
    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    /// The variation's SKU, generating one from `base_sku` if none was set.
    pub fn sku(&self, base_sku: &str) -> ValidationResult<String> {
        match &self.sku {
            Some(sku) => {
                validate_sku(sku)?;
                Ok(sku.clone())
            }
            None => variation_sku(base_sku, &self.name),
        }
    }
}

// =============================================================================
// Catalog Entry
// =============================================================================

/// A product or service available at the cashier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub kind: ItemKind,
    /// Price per unit (products) or per kilogram (services).
    pub unit_price: Money,
    #[serde(default)]
    pub variations: Vec<Variation>,
}

impl CatalogEntry {
    /// A per-unit product without variations.
    pub fn product(
        id: impl Into<String>,
        sku: impl Into<String>,
        name: impl Into<String>,
        unit_price: Money,
    ) -> Self {
        CatalogEntry {
            id: id.into(),
            sku: sku.into(),
            name: name.into(),
            kind: ItemKind::Product,
            unit_price,
            variations: Vec::new(),
        }
    }

    /// A per-kilogram service without variations.
    pub fn service(
        id: impl Into<String>,
        sku: impl Into<String>,
        name: impl Into<String>,
        price_per_kg: Money,
    ) -> Self {
        CatalogEntry {
            kind: ItemKind::Service,
            ..CatalogEntry::product(id, sku, name, price_per_kg)
        }
    }

    /// Adds a variation.
    pub fn with_variation(mut self, variation: Variation) -> Self {
        self.variations.push(variation);
        self
    }

    /// A variation must be picked before this entry can go in the cart.
    #[inline]
    pub fn has_variations(&self) -> bool {
        !self.variations.is_empty()
    }

    /// Finds a variation by id.
    pub fn variation(&self, variation_id: &str) -> Option<&Variation> {
        self.variations.iter().find(|v| v.id == variation_id)
    }

    /// Unit price for the given selection, never below zero.
    pub fn price_for(&self, variation: Option<&Variation>) -> Money {
        variation
            .and_then(|v| v.unit_price)
            .unwrap_or(self.unit_price)
            .clamp_non_negative()
    }
}

// =============================================================================
// SKU Generation
// =============================================================================

/// Builds a SKU for a variation: `BASE-VARIATION`.
///
/// The variation name is uppercased and every run of non-alphanumeric
/// characters collapses to a single `-`.
///
/// ```rust
/// use laundry_core::catalog::variation_sku;
///
/// assert_eq!(variation_sku("DET-01", "Lavender 1 L").unwrap(), "DET-01-LAVENDER-1-L");
/// assert_eq!(variation_sku("CK", "  express!! ").unwrap(), "CK-EXPRESS");
/// assert!(variation_sku("CK", "???").is_err());
/// ```
pub fn variation_sku(base_sku: &str, variation_name: &str) -> ValidationResult<String> {
    validate_sku(base_sku)?;

    let mut slug = String::with_capacity(variation_name.len());
    for ch in variation_name.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_uppercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        return Err(ValidationError::InvalidFormat {
            field: "variation name".to_string(),
            reason: "must contain at least one letter or digit".to_string(),
        });
    }

    let sku = format!("{}-{}", base_sku.trim(), slug);
    validate_sku(&sku)?;
    Ok(sku)
}

// =============================================================================
// Catalog Lookup
// =============================================================================

/// Read access to catalog entries by id.
///
/// Implemented by [`Catalog`] and by any `Fn(&str) -> Option<CatalogEntry>`,
/// so a network-backed inventory client can be dropped in.
pub trait CatalogLookup {
    /// Returns the entry with this id, if any.
    fn find_entry(&self, id: &str) -> Option<CatalogEntry>;
}

impl<F> CatalogLookup for F
where
    F: Fn(&str) -> Option<CatalogEntry>,
{
    fn find_entry(&self, id: &str) -> Option<CatalogEntry> {
        self(id)
    }
}

/// In-memory catalog keyed by entry id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, CatalogEntry>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, entry: CatalogEntry) -> Option<CatalogEntry> {
        self.entries.insert(entry.id.clone(), entry)
    }

    /// Borrowing lookup.
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        Catalog {
            entries: iter.into_iter().map(|e| (e.id.clone(), e)).collect(),
        }
    }
}

impl CatalogLookup for Catalog {
    fn find_entry(&self, id: &str) -> Option<CatalogEntry> {
        self.entries.get(id).cloned()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
