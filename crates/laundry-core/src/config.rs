//! # Pricing Configuration
//!
//! Store display settings and the promo table, loaded from TOML.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     LAUNDRY_STORE_NAME="Laundry Kita"                                  │
//! │     LAUNDRY_CURRENCY_SYMBOL=IDR                                        │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     explicit path, else $LAUNDRY_CONFIG_PATH, else                     │
//! │     ~/.config/laundry-pos/pricing.toml (Linux)                         │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     no promos, "Rp" symbol                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! name = "Laundry Kita"
//! currency_symbol = "Rp"
//!
//! [[promos]]
//! code = "HEMAT10"
//! type = "percentage"
//! value = 10
//!
//! [[promos]]
//! code = "POTONG5K"
//! type = "fixed_amount"
//! value = 5000
//! ```
//!
//! The promo table stands in for a promotions service. Hosts with a real
//! backend implement [`crate::promo::PromoLookup`] instead.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult, ValidationError};
use crate::money::{Money, DEFAULT_CURRENCY_SYMBOL};
use crate::promo::{PromoCode, PromoDirectory};
use crate::validation::{validate_amount, validate_item_name, validate_promo_code};

/// Env var naming the config file when no explicit path is given.
pub const CONFIG_PATH_ENV: &str = "LAUNDRY_CONFIG_PATH";

// =============================================================================
// Store Configuration
// =============================================================================

/// How the store presents itself on the cashier screen and receipts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Prefix for formatted amounts (`Rp 15.000`).
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_store_name() -> String {
    "Laundry".to_string()
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            name: default_store_name(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl StoreConfig {
    /// Formats an amount with the configured symbol.
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}

// =============================================================================
// Promo Configuration
// =============================================================================

/// Promo type as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromoType {
    /// `value` is a whole percentage, 0–100.
    Percentage,
    /// `value` is an amount in Rupiah.
    FixedAmount,
}

/// One `[[promos]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoConfig {
    pub code: String,
    #[serde(rename = "type")]
    pub promo_type: PromoType,
    pub value: i64,
}

impl PromoConfig {
    /// Validates the entry and turns it into a [`PromoCode`].
    pub fn to_promo(&self) -> ConfigResult<PromoCode> {
        let code = validate_promo_code(&self.code)?;

        match self.promo_type {
            PromoType::Percentage => {
                let percent = u32::try_from(self.value)
                    .ok()
                    .filter(|p| *p <= 100)
                    .ok_or_else(|| ValidationError::OutOfRange {
                        field: format!("promo {} percentage", code),
                        min: 0,
                        max: 100,
                    })?;
                Ok(PromoCode::percentage(&code, percent))
            }
            PromoType::FixedAmount => {
                let amount = Money::from_rupiah(self.value);
                validate_amount(&format!("promo {} amount", code), amount)?;
                Ok(PromoCode::fixed_amount(&code, amount))
            }
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete pricing configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub promos: Vec<PromoConfig>,
}

impl PricingConfig {
    /// Creates a config with defaults and no promos.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses TOML without touching the environment.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: PricingConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, `$LAUNDRY_CONFIG_PATH`, platform dir)
    /// 3. Environment variables
    ///
    /// A missing file is not an error; an unreadable or invalid one is.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading pricing config from file");
                config = toml::from_str(&read_file(&path)?)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        info!(
            store = %config.store.name,
            promos = config.promos.len(),
            "Pricing config loaded"
        );
        Ok(config)
    }

    /// Like [`PricingConfig::load`], falling back to defaults on any error.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load pricing config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Writes the configuration as TOML, creating parent directories.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ConfigError::Invalid("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        info!(?path, "Pricing config saved");
        Ok(())
    }

    /// Validates the configuration.
    ///
    /// ## Rules
    /// - Store name and currency symbol must not be blank
    /// - Every promo must convert (see [`PromoConfig::to_promo`])
    /// - Promo codes must be unique, ignoring case
    pub fn validate(&self) -> ConfigResult<()> {
        validate_item_name(&self.store.name)?;

        if self.store.currency_symbol.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "currency_symbol".to_string(),
            }
            .into());
        }

        let mut seen = HashSet::new();
        for promo in &self.promos {
            let promo = promo.to_promo()?;
            if !seen.insert(promo.code.clone()) {
                return Err(ValidationError::Duplicate {
                    field: "promo code".to_string(),
                    value: promo.code,
                }
                .into());
            }
        }

        Ok(())
    }

    /// Builds the promo directory the pricing engine looks codes up in.
    pub fn promo_directory(&self) -> ConfigResult<PromoDirectory> {
        self.promos.iter().map(PromoConfig::to_promo).collect()
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = var("LAUNDRY_STORE_NAME") {
            debug!(store = %name, "Overriding store name from environment");
            self.store.name = name;
        }

        if let Some(symbol) = var("LAUNDRY_CURRENCY_SYMBOL") {
            if symbol.trim().is_empty() {
                warn!("Ignoring blank LAUNDRY_CURRENCY_SYMBOL");
            } else {
                self.store.currency_symbol = symbol;
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "laundry", "pos")
            .map(|dirs| dirs.config_dir().join("pricing.toml"))
    }
}

fn read_file(path: &Path) -> ConfigResult<String> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
