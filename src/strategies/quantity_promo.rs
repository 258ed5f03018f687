//! Quantity Promotion
//!
//! "Buy X, pay for Y" offers: 2-for-1, 3-for-2 and similar. Items are bundled
//! in groups of X per item name and each complete bundle is charged as Y items.

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;

use crate::{
    items::groups::{ItemGroup, ItemGroups},
    pricing::{Charge, PricingError, total_price},
    strategies::{Charges, PromotionItems, StrategyKind, claims::Claims},
};

/// Quantity Promotion Pricing Strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityPromoPricingStrategy {
    buy_count: usize,
    pay_count: usize,
    limit_groups: Option<usize>,
    promotion_items: PromotionItems,
}

impl QuantityPromoPricingStrategy {
    /// Create a "buy `buy_count`, pay for `pay_count`" promotion with no bundle limit.
    pub fn new(buy_count: usize, pay_count: usize) -> Self {
        Self {
            buy_count,
            pay_count,
            limit_groups: None,
            promotion_items: PromotionItems::default(),
        }
    }

    /// Create a promotion applying to at most `limit_groups` bundles per item group.
    pub fn with_limit(buy_count: usize, pay_count: usize, limit_groups: usize) -> Self {
        Self {
            limit_groups: Some(limit_groups),
            ..Self::new(buy_count, pay_count)
        }
    }

    /// Return the bundle size
    pub fn buy_count(&self) -> usize {
        self.buy_count
    }

    /// Return the number of items paid for per bundle
    pub fn pay_count(&self) -> usize {
        self.pay_count
    }

    /// Return the bundle limit
    pub fn limit_groups(&self) -> Option<usize> {
        self.limit_groups
    }

    /// Return the promoted item names
    pub fn promotion_items(&self) -> &PromotionItems {
        &self.promotion_items
    }

    pub(crate) fn promotion_items_mut(&mut self) -> &mut PromotionItems {
        &mut self.promotion_items
    }

    /// Price each promoted, unclaimed group in full, claiming all its items.
    ///
    /// # Errors
    ///
    /// - [`PricingError::EmptyBundle`]: the bundle size is zero and a group needs pricing.
    /// - [`PricingError::BundleOverflow`]: the paid item count or price overflows.
    /// - [`PricingError::Money`]: a currency mismatch between items.
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

            let Some(charged) = self.group_price(group, currency)? else {
                continue;
            };

            let base = total_price(group.iter(), currency)?;

            claims.claim(name, StrategyKind::QuantityPromo, group.len());
            charges.push(Charge::new(
                name.as_str(),
                StrategyKind::QuantityPromo,
                group.len(),
                base,
                charged,
            ));
        }

        Ok(charges)
    }

    /// Price one group, assuming every item in it costs the same as the first.
    fn group_price<'a>(
        &self,
        group: &ItemGroup<'a>,
        currency: &'a Currency,
    ) -> Result<Option<Money<'a, Currency>>, PricingError> {
        let Some(first) = group.first() else {
            return Ok(None);
        };

        let items = group.len();
        let bundles = items
            .checked_div(self.buy_count)
            .ok_or(PricingError::EmptyBundle)?;
        let bundles = self
            .limit_groups
            .map_or(bundles, |limit| bundles.min(limit));

        // Complete bundles never exceed the item count, so this cannot underflow.
        let full_price_items = items - bundles * self.buy_count;
        let paid_items = bundles
            .checked_mul(self.pay_count)
            .and_then(|paid| paid.checked_add(full_price_items))
            .ok_or(PricingError::BundleOverflow)?;

        let charged = first
            .price()
            .amount()
            .checked_mul(Decimal::from(paid_items))
            .ok_or(PricingError::BundleOverflow)?;

        Ok(Some(Money::from_decimal(charged, currency)))
    }
}
