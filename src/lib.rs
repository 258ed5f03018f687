//! Till
//!
//! Till prices a shopping basket. Items are grouped by name and each group is
//! priced by at most one promotional strategy (weighted pricing or a "buy X, pay
//! for Y" quantity promotion), with everything left over charged at full price.

pub mod basket;
pub mod fixtures;
pub mod items;
pub mod prelude;
pub mod pricing;
pub mod receipt;
pub mod strategies;
pub mod utils;
