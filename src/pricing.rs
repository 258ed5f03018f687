//! Pricing

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{items::Item, strategies::StrategyKind};

/// Errors that can occur while pricing items.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// A quantity promotion was configured with a bundle of zero items.
    #[error("quantity promotion bundles must contain at least one item")]
    EmptyBundle,

    /// A quantity promotion's paid item count does not fit in the arithmetic.
    #[error("quantity promotion paid item count overflowed")]
    BundleOverflow,
}

/// Calculates the total price of a sequence of items.
///
/// An empty sequence totals zero in `currency`.
///
/// # Errors
///
/// Returns [`PricingError::Money`] on a currency mismatch between items.
pub fn total_price<'i, 'a: 'i>(
    items: impl IntoIterator<Item = &'i Item<'a>>,
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, PricingError> {
    let total = items
        .into_iter()
        .try_fold(Money::from_minor(0, currency), |acc, item| {
            acc.add(item.price())
        })?;

    Ok(total)
}

/// The price charged for some items of one group by one strategy.
#[derive(Clone, Debug, PartialEq)]
pub struct Charge<'a> {
    name: String,
    kind: StrategyKind,
    quantity: usize,
    base: Money<'a, Currency>,
    charged: Money<'a, Currency>,
}

impl<'a> Charge<'a> {
    /// Create a new charge.
    pub fn new(
        name: impl Into<String>,
        kind: StrategyKind,
        quantity: usize,
        base: Money<'a, Currency>,
        charged: Money<'a, Currency>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            quantity,
            base,
            charged,
        }
    }

    /// Name of the priced item group
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Strategy that priced the items
    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// Number of items covered by this charge
    pub fn quantity(&self) -> usize {
        self.quantity
    }

    /// Undiscounted price of the covered items
    pub fn base(&self) -> Money<'a, Currency> {
        self.base
    }

    /// Amount actually charged for the covered items
    pub fn charged(&self) -> Money<'a, Currency> {
        self.charged
    }

    /// Amount saved against the undiscounted price.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction fails.
    pub fn savings(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.base.sub(self.charged)
    }
}

/// Sum the charged amounts of a set of charges.
///
/// # Errors
///
/// Returns [`PricingError::Money`] on a currency mismatch between charges.
pub fn total_charged<'c, 'a: 'c>(
    charges: impl IntoIterator<Item = &'c Charge<'a>>,
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, PricingError> {
    let total = charges
        .into_iter()
        .try_fold(Money::from_minor(0, currency), |acc, charge| {
            acc.add(charge.charged())
        })?;

    Ok(total)
}
