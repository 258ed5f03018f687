//! Pricing Strategies

use std::fmt;

use rustc_hash::FxHashSet;
use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;

use crate::{
    items::groups::ItemGroups,
    pricing::{Charge, PricingError, total_charged},
    strategies::claims::Claims,
};

pub mod claims;
pub mod quantity_promo;
pub mod simple;
pub mod weighted;

#[cfg(test)]
pub(crate) mod test_support;

pub use quantity_promo::QuantityPromoPricingStrategy;
pub use simple::SimplePricingStrategy;
pub use weighted::WeightedPricingStrategy;

/// Names of the item groups a strategy is configured to price.
pub type PromotionItems = FxHashSet<String>;

/// Charges produced by one strategy over a basket.
pub type Charges<'a> = SmallVec<[Charge<'a>; 8]>;

/// Strategy kind, the key a basket registers strategies under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StrategyKind {
    /// Full price per item
    Simple,

    /// Price by weight
    Weighted,

    /// Buy X, pay for Y
    QuantityPromo,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrategyKind::Simple => "simple",
            StrategyKind::Weighted => "weighted",
            StrategyKind::QuantityPromo => "quantity promotion",
        })
    }
}

/// Pricing strategy enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingStrategy {
    /// Simple per-unit pricing
    Simple(SimplePricingStrategy),

    /// Weighted pricing
    Weighted(WeightedPricingStrategy),

    /// Quantity promotion pricing
    QuantityPromo(QuantityPromoPricingStrategy),
}

impl PricingStrategy {
    /// Return the strategy kind.
    pub fn kind(&self) -> StrategyKind {
        match self {
            PricingStrategy::Simple(_) => StrategyKind::Simple,
            PricingStrategy::Weighted(_) => StrategyKind::Weighted,
            PricingStrategy::QuantityPromo(_) => StrategyKind::QuantityPromo,
        }
    }

    /// Return the promoted item names, or `None` for strategies that apply to everything.
    pub fn promotion_items(&self) -> Option<&PromotionItems> {
        match self {
            PricingStrategy::Simple(_) => None,
            PricingStrategy::Weighted(weighted) => Some(weighted.promotion_items()),
            PricingStrategy::QuantityPromo(quantity_promo) => {
                Some(quantity_promo.promotion_items())
            }
        }
    }

    /// Mutable access to the promoted item names.
    pub fn promotion_items_mut(&mut self) -> Option<&mut PromotionItems> {
        match self {
            PricingStrategy::Simple(_) => None,
            PricingStrategy::Weighted(weighted) => Some(weighted.promotion_items_mut()),
            PricingStrategy::QuantityPromo(quantity_promo) => {
                Some(quantity_promo.promotion_items_mut())
            }
        }
    }

    /// Price the groups this strategy applies to that are not yet claimed.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the inner strategy fails.
    pub fn price<'a>(
        &self,
        groups: &ItemGroups<'a>,
        claims: &mut Claims,
        currency: &'a Currency,
    ) -> Result<Charges<'a>, PricingError> {
        match self {
            PricingStrategy::Simple(simple) => simple.price(groups, claims, currency),
            PricingStrategy::Weighted(weighted) => weighted.price(groups, claims, currency),
            PricingStrategy::QuantityPromo(quantity_promo) => {
                quantity_promo.price(groups, claims, currency)
            }
        }
    }

    /// Subtotal for the groups this strategy prices.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the inner strategy fails.
    pub fn calculate<'a>(
        &self,
        groups: &ItemGroups<'a>,
        claims: &mut Claims,
        currency: &'a Currency,
    ) -> Result<Money<'a, Currency>, PricingError> {
        let charges = self.price(groups, claims, currency)?;

        total_charged(&charges, currency)
    }
}

impl Default for PricingStrategy {
    fn default() -> Self {
        PricingStrategy::Simple(SimplePricingStrategy)
    }
}

impl From<SimplePricingStrategy> for PricingStrategy {
    fn from(strategy: SimplePricingStrategy) -> Self {
        PricingStrategy::Simple(strategy)
    }
}

impl From<WeightedPricingStrategy> for PricingStrategy {
    fn from(strategy: WeightedPricingStrategy) -> Self {
        PricingStrategy::Weighted(strategy)
    }
}

impl From<QuantityPromoPricingStrategy> for PricingStrategy {
    fn from(strategy: QuantityPromoPricingStrategy) -> Self {
        PricingStrategy::QuantityPromo(strategy)
    }
}
