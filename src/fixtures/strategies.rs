//! Strategy Fixtures

use serde::Deserialize;

use crate::strategies::{
    PricingStrategy, QuantityPromoPricingStrategy, SimplePricingStrategy, StrategyKind,
    WeightedPricingStrategy,
};

/// Strategy fixture from YAML
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StrategyFixture {
    /// Simple per-unit pricing
    Simple,

    /// Weighted pricing
    Weighted {
        /// Price at most this many items per group
        #[serde(default)]
        limit: Option<usize>,

        /// Item names priced by weight
        #[serde(default)]
        promotions: Vec<String>,
    },

    /// Buy X, pay for Y
    QuantityPromo {
        /// Bundle size
        buy: usize,

        /// Items paid for per bundle
        pay: usize,

        /// Maximum number of bundles per group
        #[serde(default)]
        limit_groups: Option<usize>,

        /// Item names covered by the promotion
        #[serde(default)]
        promotions: Vec<String>,
    },
}

impl StrategyFixture {
    /// Kind of the strategy this fixture builds.
    pub fn kind(&self) -> StrategyKind {
        match self {
            StrategyFixture::Simple => StrategyKind::Simple,
            StrategyFixture::Weighted { .. } => StrategyKind::Weighted,
            StrategyFixture::QuantityPromo { .. } => StrategyKind::QuantityPromo,
        }
    }

    /// Split into the strategy and the item names to promote under it.
    pub fn into_parts(self) -> (PricingStrategy, Vec<String>) {
        match self {
            StrategyFixture::Simple => (SimplePricingStrategy::new().into(), Vec::new()),
            StrategyFixture::Weighted { limit, promotions } => {
                let strategy = limit.map_or_else(
                    WeightedPricingStrategy::new,
                    WeightedPricingStrategy::with_limit,
                );

                (strategy.into(), promotions)
            }
            StrategyFixture::QuantityPromo {
                buy,
                pay,
                limit_groups,
                promotions,
            } => {
                let strategy = match limit_groups {
                    Some(limit) => QuantityPromoPricingStrategy::with_limit(buy, pay, limit),
                    None => QuantityPromoPricingStrategy::new(buy, pay),
                };

                (strategy.into(), promotions)
            }
        }
    }
}
