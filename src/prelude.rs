//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::{Basket, BasketError},
    fixtures::{BasketFixture, Fixture, FixtureError},
    items::{
        Item,
        groups::{ItemGroup, ItemGroups},
    },
    pricing::{Charge, PricingError},
    receipt::{Receipt, ReceiptError},
    strategies::{
        PricingStrategy, QuantityPromoPricingStrategy, SimplePricingStrategy, StrategyKind,
        WeightedPricingStrategy, claims::Claims,
    },
};
