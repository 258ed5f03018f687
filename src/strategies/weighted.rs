//! Weighted Pricing
//!
//! Prices promoted items by weight, optionally for only the first few items of
//! each promoted group.

use rusty_money::iso::Currency;
use smallvec::SmallVec;

use crate::{
    items::groups::ItemGroups,
    pricing::{Charge, PricingError, total_price},
    strategies::{Charges, PromotionItems, StrategyKind, claims::Claims},
};

/// Weighted Pricing Strategy
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WeightedPricingStrategy {
    limit: Option<usize>,
    promotion_items: PromotionItems,
}

impl WeightedPricingStrategy {
    /// Create a weighted strategy that prices every item of a promoted group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a weighted strategy that prices at most `limit` items per group.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            promotion_items: PromotionItems::default(),
        }
    }

    /// Return the per-group item limit
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Return the promoted item names
    pub fn promotion_items(&self) -> &PromotionItems {
        &self.promotion_items
    }

    pub(crate) fn promotion_items_mut(&mut self) -> &mut PromotionItems {
        &mut self.promotion_items
    }

    /// Price the leading items of each promoted, unclaimed group.
    ///
    /// The group is claimed even when the limit is zero, so items past the
    /// limit are left to the simple pass rather than another promotion.
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
            if !self.promotion_items.contains(name) || claims.is_claimed(name) {
                continue;
            }

            let count = self
                .limit
                .map_or(group.len(), |limit| limit.min(group.len()));

            // A zero limit still takes the group away from later promotions.
            if count == 0 {
                claims.claim(name, StrategyKind::Weighted, 0);
                continue;
            }

            let total = total_price(group.iter().take(count), currency)?;

            claims.claim(name, StrategyKind::Weighted, count);
            charges.push(Charge::new(
                name.as_str(),
                StrategyKind::Weighted,
                count,
                total,
                total,
            ));
        }

        Ok(charges)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::{Money, iso::GBP};
    use testresult::TestResult;

    use crate::{items::Item, strategies::test_support::groups};

    use super::*;

    fn yogurts<'a>(n: usize) -> Vec<Item<'a>> {
        (0..n)
            .map(|_| Item::weighted("Yogurt", Money::from_minor(500, GBP), Decimal::new(7, 1)))
            .collect()
    }

    #[test]
    fn ignores_groups_outside_promotion_set() -> TestResult {
        let groups = groups(yogurts(2));
        let mut claims = Claims::new();

        let charges = WeightedPricingStrategy::new().price(&groups, &mut claims, GBP)?;

        assert!(charges.is_empty());
        assert!(claims.is_empty());

        Ok(())
    }

    #[test]
    fn prices_whole_group_without_limit() -> TestResult {
        let groups = groups(yogurts(3));
        let mut claims = Claims::new();
        let mut strategy = WeightedPricingStrategy::new();
        strategy.promotion_items_mut().insert("Yogurt".to_string());

        let charges = strategy.price(&groups, &mut claims, GBP)?;

        assert_eq!(
            charges.first().map(|c| (c.quantity(), c.charged())),
            Some((3, Money::from_minor(1050, GBP)))
        );
        assert_eq!(claims.claimed_count("Yogurt"), 3);

        Ok(())
    }

    #[test]
    fn limit_leaves_remaining_items_unclaimed() -> TestResult {
        let groups = groups(yogurts(3));
        let mut claims = Claims::new();
        let mut strategy = WeightedPricingStrategy::with_limit(2);
        strategy.promotion_items_mut().insert("Yogurt".to_string());

        let charges = strategy.price(&groups, &mut claims, GBP)?;

        assert_eq!(strategy.limit(), Some(2));
        assert_eq!(
            charges.first().map(|c| (c.quantity(), c.charged())),
            Some((2, Money::from_minor(700, GBP)))
        );
        assert_eq!(claims.claimed_count("Yogurt"), 2);

        Ok(())
    }

    #[test]
    fn zero_limit_claims_group_without_charging() -> TestResult {
        let groups = groups(yogurts(2));
        let mut claims = Claims::new();
        let mut strategy = WeightedPricingStrategy::with_limit(0);
        strategy.promotion_items_mut().insert("Yogurt".to_string());

        let charges = strategy.price(&groups, &mut claims, GBP)?;

        assert!(charges.is_empty());
        assert_eq!(claims.claimant("Yogurt"), Some(StrategyKind::Weighted));
        assert_eq!(claims.claimed_count("Yogurt"), 0);

        Ok(())
    }

    #[test]
    fn skips_groups_claimed_by_another_strategy() -> TestResult {
        let groups = groups(yogurts(1));
        let mut claims = Claims::new();
        claims.claim("Yogurt", StrategyKind::QuantityPromo, 1);

        let mut strategy = WeightedPricingStrategy::new();
        strategy.promotion_items_mut().insert("Yogurt".to_string());

        assert!(strategy.price(&groups, &mut claims, GBP)?.is_empty());

        Ok(())
    }
}
