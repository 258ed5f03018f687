//! Fixtures
//!
//! Baskets described in YAML: a currency, the items, and the pricing
//! strategies with the item names each one promotes.
//!
//! ```yaml
//! currency: GBP
//! items:
//!   - name: Yogurt
//!     price: "5.00 GBP"
//!     count: 2
//! strategies:
//!   - type: quantity_promo
//!     buy: 2
//!     pay: 1
//!     promotions: [Yogurt]
//! ```

use std::{fs, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    basket::{Basket, BasketError},
    fixtures::{
        items::{ItemFixture, parse_currency},
        strategies::StrategyFixture,
    },
};

pub mod items;
pub mod strategies;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid multiplier format
    #[error("Invalid multiplier: {0}")]
    InvalidMultiplier(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Basket creation error
    #[error("Failed to create basket: {0}")]
    Basket(#[from] BasketError),
}

/// A basket as described in a fixture file
#[derive(Debug, Deserialize)]
pub struct BasketFixture {
    /// ISO currency code of the basket
    pub currency: String,

    /// Items, in the order they are added
    #[serde(default)]
    pub items: Vec<ItemFixture>,

    /// Strategies, in the order they are registered
    #[serde(default)]
    pub strategies: Vec<StrategyFixture>,
}

impl BasketFixture {
    /// Parse a basket fixture from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Yaml`] if the document is malformed.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Build the basket, registering each strategy before its promotions.
    ///
    /// # Errors
    ///
    /// Returns an error if a price, multiplier or currency is invalid, or if an
    /// item's currency differs from the basket's.
    pub fn into_basket(self) -> Result<Basket<'static>, FixtureError> {
        let currency = parse_currency(&self.currency)?;
        let mut basket = Basket::new(currency);

        for item in self.items {
            basket.add_items(item.try_into_items()?)?;
        }

        for strategy in self.strategies {
            let kind = strategy.kind();
            let (strategy, promotions) = strategy.into_parts();

            basket.add_pricing_strategy(strategy);

            if !promotions.is_empty() {
                basket.add_promotions(kind, promotions)?;
            }
        }

        Ok(basket)
    }
}

/// Fixture
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,
}

impl Fixture {
    /// Create a new fixture loader with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new fixture loader with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Load a basket fixture from `<base path>/<name>.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(&self, name: &str) -> Result<BasketFixture, FixtureError> {
        let file_path = self.base_path.join(format!("{name}.yml"));

        debug!(path = %file_path.display(), "loading basket fixture");

        let contents = fs::read_to_string(&file_path)?;

        BasketFixture::from_yaml(&contents)
    }

    /// Load a fixture set and build its basket
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture cannot be loaded or the basket cannot be built.
    pub fn basket(&self, name: &str) -> Result<Basket<'static>, FixtureError> {
        self.load(name)?.into_basket()
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
