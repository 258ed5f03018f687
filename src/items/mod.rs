//! Items

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

pub mod groups;

/// An unprocessed item with a name, a unit price and a weight or quantity multiplier.
#[derive(Clone, Debug, PartialEq)]
pub struct Item<'a> {
    name: String,
    unit_price: Money<'a, Currency>,
    multiplier: Decimal,
}

impl<'a> Item<'a> {
    /// Creates a new item with the given name and unit price, and a multiplier of one.
    #[must_use]
    pub fn new(name: impl Into<String>, unit_price: Money<'a, Currency>) -> Self {
        Self::weighted(name, unit_price, Decimal::ONE)
    }

    /// Creates a new item priced per unit of weight (or quantity).
    ///
    /// Negative prices and multipliers are accepted as given.
    pub fn weighted(
        name: impl Into<String>,
        unit_price: Money<'a, Currency>,
        multiplier: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            unit_price,
            multiplier,
        }
    }

    /// Returns the item name, shared by every item in its group.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the price of a single unit.
    pub fn unit_price(&self) -> &Money<'a, Currency> {
        &self.unit_price
    }

    /// Returns the weight or quantity multiplier.
    pub fn multiplier(&self) -> Decimal {
        self.multiplier
    }

    /// Returns the price of the item: unit price times multiplier.
    pub fn price(&self) -> Money<'a, Currency> {
        Money::from_decimal(
            *self.unit_price.amount() * self.multiplier,
            self.unit_price.currency(),
        )
    }
}
