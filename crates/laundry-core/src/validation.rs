//! # Validation Module
//!
//! Input validation utilities for laundry-core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Cashier form (TypeScript)                                    │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Promo codes typed at the cashier (required, normalised)           │
//! │  └── Catalog / config values (SKU, name, price, rate)                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: External services (inventory, promotions, orders)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use laundry_core::validation::{normalize_promo_code, validate_sku};
//!
//! assert!(validate_sku("CK-REG").is_ok());
//! assert_eq!(normalize_promo_code("  hemat10 ").unwrap(), "HEMAT10");
//! ```

use crate::error::ValidationError;
use crate::money::{DiscountRate, Money};
use crate::MAX_PROMO_CODE_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum SKU length.
pub const MAX_SKU_LEN: usize = 50;

/// Maximum display name length.
pub const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a SKU (Stock Keeping Unit).
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only letters, digits, hyphens, underscores
///
/// ```rust
/// use laundry_core::validation::validate_sku;
///
/// assert!(validate_sku("DET-500-ML").is_ok());
/// assert!(validate_sku("").is_err());
/// assert!(validate_sku("A".repeat(100).as_str()).is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.chars().count() > MAX_SKU_LEN {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: MAX_SKU_LEN,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a catalog entry or variation name.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Normalises a promo code typed at the cashier.
///
/// Trims and uppercases. The only rule is that something must be left;
/// unknown codes are the promo directory's call, not this function's.
///
/// ```rust
/// use laundry_core::validation::normalize_promo_code;
///
/// assert_eq!(normalize_promo_code("diskon20").unwrap(), "DISKON20");
/// assert!(normalize_promo_code("   ").is_err());
/// ```
pub fn normalize_promo_code(code: &str) -> ValidationResult<String> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "promo code".to_string(),
        });
    }

    Ok(code.to_uppercase())
}

/// Validates a promo code defined in configuration and returns it normalised.
///
/// ## Rules
/// - Required (see [`normalize_promo_code`])
/// - At most [`MAX_PROMO_CODE_LEN`] characters
/// - Only letters, digits, hyphens, underscores
pub fn validate_promo_code(code: &str) -> ValidationResult<String> {
    let code = normalize_promo_code(code)?;

    if code.chars().count() > MAX_PROMO_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "promo code".to_string(),
            max: MAX_PROMO_CODE_LEN,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "promo code".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(code)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price or fixed discount amount.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items, no-op promos)
///
/// ```rust
/// use laundry_core::money::Money;
/// use laundry_core::validation::validate_amount;
///
/// assert!(validate_amount("price", Money::from_rupiah(15_000)).is_ok());
/// assert!(validate_amount("price", Money::zero()).is_ok());
/// assert!(validate_amount("price", Money::from_rupiah(-100)).is_err());
/// ```
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a percentage promo rate.
///
/// ## Rules
/// - Between 0% and 100% (0–10000 bps)
pub fn validate_discount_rate(rate: DiscountRate) -> ValidationResult<()> {
    if !rate.is_valid() {
        return Err(ValidationError::OutOfRange {
            field: "discount percentage".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
