//! Simple Pricing
//!
//! Full price for every item no other strategy has priced.

use rusty_money::iso::Currency;
use smallvec::SmallVec;

use crate::{
    items::groups::ItemGroups,
    pricing::{Charge, PricingError, total_price},
    strategies::{Charges, StrategyKind, claims::Claims},
};

/// Default pricing: `price * multiplier` for each unclaimed item.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimplePricingStrategy;

impl SimplePricingStrategy {
    /// Create a new simple pricing strategy.
    pub fn new() -> Self {
        Self
    }

    /// Price every item not yet claimed, claiming it.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Money`] on a currency mismatch.
    pub fn price<'a>(
        &self,
        groups: &ItemGroups<'a>,
        claims: &mut Claims,
        currency: &'a Currency,
    ) -> Result<Charges<'a>, PricingError> {
        let mut charges = SmallVec::new();

        for (name, group) in groups {
            let claimed = claims.claimed_count(name);
            let remaining = group.len().saturating_sub(claimed);

            if remaining == 0 {
                continue;
            }

            let total = total_price(group.iter().skip(claimed), currency)?;

            claims.claim(name, StrategyKind::Simple, remaining);
            charges.push(Charge::new(
                name.as_str(),
                StrategyKind::Simple,
                remaining,
                total,
                total,
            ));
        }

        Ok(charges)
    }
}
