//! # Error Types
//!
//! Domain-specific error types for laundry-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CartError        - Rejected cart operations (promo, catalog lookups)   │
//! │  ValidationError  - Input validation failures                           │
//! │  ConfigError      - Config file could not be read or is invalid         │
//! │                                                                         │
//! │  Flow: ValidationError → CartError / ConfigError → cashier notice       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every `CartError` is a user-facing outcome: the cart is left untouched
//!    and the cashier may retry immediately
//! 3. Errors are enum variants, never String

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// A cart operation that was rejected.
///
/// None of these are fatal. The cart is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The promo code is already on the cart.
    ///
    /// ## User Workflow
    /// ```text
    /// Apply "HEMAT10" ──► OK, promos = [HEMAT10]
    ///      │
    ///      ▼
    /// Apply "hemat10" ──► PromoAlreadyApplied { code: "HEMAT10" }
    ///      │
    ///      ▼
    /// UI shows: "promo already applied"
    /// ```
    #[error("promo already applied")]
    PromoAlreadyApplied { code: String },

    /// The promo directory has no entry for this code.
    #[error("invalid promo code")]
    InvalidPromoCode { code: String },

    /// The catalog has no entry for this product or service id.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The selected variation does not belong to the product.
    #[error("Variation {variation_id} not found for product {product_id}")]
    VariationNotFound {
        product_id: String,
        variation_id: String,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation before business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., illegal characters in a code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., the same promo code configured twice).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Config Error
// =============================================================================

/// Errors raised while loading [`crate::config::PricingConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has the wrong shape.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be written back out as TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A configured value failed validation.
    #[error("Invalid config: {0}")]
    Validation(#[from] ValidationError),

    /// Anything else that makes the config unusable.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

/// Convenience type alias for Results with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================
