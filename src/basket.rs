//! Basket

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::debug;

use crate::{
    items::{
        Item,
        groups::{ItemGroup, ItemGroups},
    },
    pricing::{PricingError, total_price},
    receipt::Receipt,
    strategies::{
        Charges, PricingStrategy, SimplePricingStrategy, StrategyKind, claims::Claims,
    },
};

/// Prices whatever the registered strategies leave unclaimed.
static DEFAULT_STRATEGY: PricingStrategy = PricingStrategy::Simple(SimplePricingStrategy);

/// Errors related to basket construction or totals.
#[derive(Debug, Error, PartialEq)]
pub enum BasketError {
    /// An item's currency differs from the basket currency (item name, item currency, basket currency).
    #[error("Item {0} has currency {1}, but basket has currency {2}")]
    CurrencyMismatch(String, &'static str, &'static str),

    /// A promotion was assigned to a strategy kind with no registered strategy.
    #[error("No {0} strategy is registered")]
    StrategyNotRegistered(StrategyKind),

    /// A promotion was assigned to a strategy that prices every item.
    #[error("The {0} strategy has no promotion items")]
    NoPromotionSet(StrategyKind),

    /// Errors bubbled up from pricing.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Basket
///
/// Items are grouped by name. Strategies are registered one per kind and
/// applied in registration order when the basket is priced.
#[derive(Debug, Clone)]
pub struct Basket<'a> {
    groups: ItemGroups<'a>,
    strategies: IndexMap<StrategyKind, PricingStrategy, FxBuildHasher>,
    currency: &'static Currency,
}

impl<'a> Basket<'a> {
    /// Create a new, empty basket.
    pub fn new(currency: &'static Currency) -> Self {
        Basket {
            groups: ItemGroups::default(),
            strategies: IndexMap::default(),
            currency,
        }
    }

    /// Create a new basket with the given items.
    ///
    /// # Errors
    ///
    /// Returns a `BasketError` if there was a currency mismatch error.
    pub fn with_items(
        items: impl IntoIterator<Item = Item<'a>>,
        currency: &'static Currency,
    ) -> Result<Self, BasketError> {
        let mut basket = Basket::new(currency);

        basket.add_items(items)?;

        Ok(basket)
    }

    /// Add an item to the group sharing its name.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::CurrencyMismatch`] if the item is priced in another currency.
    pub fn add_item(&mut self, item: Item<'a>) -> Result<(), BasketError> {
        let item_currency = item.unit_price().currency();

        if item_currency != self.currency {
            return Err(BasketError::CurrencyMismatch(
                item.name().to_string(),
                item_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        self.groups
            .entry(item.name().to_string())
            .or_insert_with(ItemGroup::default)
            .push(item);

        Ok(())
    }

    /// Add items in order, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::CurrencyMismatch`] if an item is priced in another currency.
    pub fn add_items(
        &mut self,
        items: impl IntoIterator<Item = Item<'a>>,
    ) -> Result<(), BasketError> {
        items.into_iter().try_for_each(|item| self.add_item(item))
    }

    /// Register a pricing strategy.
    ///
    /// Registering a kind a second time replaces the earlier strategy, along with
    /// its promotion items, but keeps its place in the pricing order.
    ///
    /// Registration order decides overlaps: when several strategies promote the
    /// same item name, the first one registered prices that group and the others
    /// skip it.
    pub fn add_pricing_strategy(&mut self, strategy: impl Into<PricingStrategy>) {
        let strategy = strategy.into();

        self.strategies.insert(strategy.kind(), strategy);
    }

    /// Assign an item name to the strategy registered under `kind`.
    ///
    /// # Errors
    ///
    /// - [`BasketError::StrategyNotRegistered`]: no strategy of that kind is registered.
    /// - [`BasketError::NoPromotionSet`]: the strategy prices every item.
    pub fn add_promotion(
        &mut self,
        kind: StrategyKind,
        item_name: impl Into<String>,
    ) -> Result<(), BasketError> {
        self.add_promotions(kind, [item_name])
    }

    /// Assign several item names to the strategy registered under `kind`.
    ///
    /// # Errors
    ///
    /// - [`BasketError::StrategyNotRegistered`]: no strategy of that kind is registered.
    /// - [`BasketError::NoPromotionSet`]: the strategy prices every item.
    pub fn add_promotions(
        &mut self,
        kind: StrategyKind,
        item_names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<(), BasketError> {
        let promotion_items = self
            .strategies
            .get_mut(&kind)
            .ok_or(BasketError::StrategyNotRegistered(kind))?
            .promotion_items_mut()
            .ok_or(BasketError::NoPromotionSet(kind))?;

        promotion_items.extend(item_names.into_iter().map(Into::into));

        Ok(())
    }

    /// Strategies in the order they price the basket: registered promotional
    /// strategies first, in registration order, then the simple strategy.
    fn pricing_order(&self) -> impl Iterator<Item = &PricingStrategy> {
        let promotional = self
            .strategies
            .values()
            .filter(|strategy| strategy.kind() != StrategyKind::Simple);

        let simple = self
            .strategies
            .get(&StrategyKind::Simple)
            .unwrap_or(&DEFAULT_STRATEGY);

        promotional.chain(std::iter::once(simple))
    }

    /// Price every item in the basket, one charge per strategy and group.
    ///
    /// Registered promotional strategies run first, in registration order. The
    /// simple strategy then prices whatever they left unclaimed.
    ///
    /// # Errors
    ///
    /// Returns a [`BasketError::Pricing`] if a strategy fails.
    pub fn charges(&self) -> Result<Charges<'a>, BasketError> {
        let mut claims = Claims::new();
        let mut charges = Charges::new();

        for strategy in self.pricing_order() {
            let priced = strategy.price(&self.groups, &mut claims, self.currency)?;

            debug!(
                kind = %strategy.kind(),
                groups = priced.len(),
                "strategy priced item groups"
            );

            charges.extend(priced);
        }

        Ok(charges)
    }

    /// Calculate the total price of the basket.
    ///
    /// Sums each strategy's subtotal, in the same order as [`Basket::charges`].
    ///
    /// # Errors
    ///
    /// Returns a [`BasketError::Pricing`] if a strategy fails.
    pub fn total(&self) -> Result<Money<'a, Currency>, BasketError> {
        let mut claims = Claims::new();
        let mut total = Money::from_minor(0, self.currency);

        for strategy in self.pricing_order() {
            let subtotal = strategy.calculate(&self.groups, &mut claims, self.currency)?;

            debug!(kind = %strategy.kind(), %subtotal, "strategy subtotal");

            total = total.add(subtotal).map_err(PricingError::from)?;
        }

        Ok(total)
    }

    /// Calculate the subtotal of the basket, every item at full price.
    ///
    /// # Errors
    ///
    /// Returns a [`BasketError::Pricing`] if there was a money arithmetic error.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, BasketError> {
        let items = self.groups.values().flat_map(|group| group.iter());

        Ok(total_price(items, self.currency)?)
    }

    /// Price the basket and itemise the result.
    ///
    /// # Errors
    ///
    /// Returns a [`BasketError::Pricing`] if a strategy fails.
    pub fn receipt(&self) -> Result<Receipt<'a>, BasketError> {
        let charges = self.charges()?;

        Ok(Receipt::from_charges(charges, self.currency)?)
    }

    /// Iterate over the item groups, by name.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &ItemGroup<'a>)> {
        self.groups
            .iter()
            .map(|(name, group)| (name.as_str(), group))
    }

    /// Get the item group for a name.
    pub fn group(&self, name: &str) -> Option<&ItemGroup<'a>> {
        self.groups.get(name)
    }

    /// Get the strategy registered under a kind.
    pub fn strategy(&self, kind: StrategyKind) -> Option<&PricingStrategy> {
        self.strategies.get(&kind)
    }

    /// Get the number of items in the basket.
    pub fn len(&self) -> usize {
        self.groups.values().map(ItemGroup::len).sum()
    }

    /// Check if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.groups.values().all(ItemGroup::is_empty)
    }

    /// Get the currency of the basket.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
