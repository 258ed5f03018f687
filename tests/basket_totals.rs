//! Integration tests for basket totals across the pricing strategies.
//!
//! Each group of items is priced once: by the first registered strategy that
//! promotes its name, with anything left over charged at full price.

use rstest::rstest;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::GBP};
use testresult::TestResult;

use till::prelude::*;

const YOGURT: &str = "Yogurt";
const CHEESE: &str = "Cheese";
const MILK: &str = "Milk";
const SANDWICH: &str = "Sandwich";

fn item(name: &str, minor: i64) -> Item<'static> {
    Item::new(name, Money::from_minor(minor, GBP))
}

fn weighted(name: &str, minor: i64, multiplier: Decimal) -> Item<'static> {
    Item::weighted(name, Money::from_minor(minor, GBP), multiplier)
}

#[test]
fn empty_basket() -> TestResult {
    let basket = Basket::new(GBP);

    assert_eq!(basket.total()?, Money::from_minor(0, GBP));

    Ok(())
}

#[rstest]
#[case::one_item(vec![item(YOGURT, 500)], 500)]
#[case::two_same_items(vec![item(YOGURT, 500), item(YOGURT, 500)], 1000)]
#[case::two_different_items(vec![item(YOGURT, 500), item(CHEESE, 300)], 800)]
#[case::multiple_different_items(
    vec![
        item(YOGURT, 500),
        item(YOGURT, 500),
        item(CHEESE, 300),
        item(CHEESE, 300),
        item(MILK, 100),
    ],
    1700
)]
fn no_strategy_totals_full_prices(
    #[case] items: Vec<Item<'static>>,
    #[case] expected_minor: i64,
) -> TestResult {
    let basket = Basket::with_items(items, GBP)?;

    assert_eq!(basket.total()?, Money::from_minor(expected_minor, GBP));
    assert_eq!(basket.total()?, basket.subtotal()?);

    Ok(())
}

#[test]
fn one_item_below_three_for_two_threshold() -> TestResult {
    let mut basket = Basket::new(GBP);

    basket.add_pricing_strategy(QuantityPromoPricingStrategy::new(3, 2));
    basket.add_promotion(StrategyKind::QuantityPromo, YOGURT)?;
    basket.add_item(item(YOGURT, 500))?;

    assert_eq!(basket.total()?, Money::from_minor(500, GBP));

    Ok(())
}

#[test]
fn two_for_one_on_one_group_only() -> TestResult {
    let mut basket = Basket::new(GBP);

    basket.add_pricing_strategy(QuantityPromoPricingStrategy::new(2, 1));
    basket.add_promotion(StrategyKind::QuantityPromo, YOGURT)?;
    basket.add_items([item(YOGURT, 500), item(YOGURT, 500), item(CHEESE, 300)])?;

    assert_eq!(basket.total()?, Money::from_minor(800, GBP));

    Ok(())
}

#[test]
fn weighted_item_with_unfilled_two_for_one() -> TestResult {
    let mut basket = Basket::new(GBP);

    basket.add_pricing_strategy(WeightedPricingStrategy::new());
    basket.add_pricing_strategy(QuantityPromoPricingStrategy::new(2, 1));
    basket.add_promotion(StrategyKind::Weighted, YOGURT)?;
    basket.add_promotion(StrategyKind::QuantityPromo, CHEESE)?;
    basket.add_items([weighted(YOGURT, 500, Decimal::new(7, 1)), item(CHEESE, 500)])?;

    assert_eq!(basket.total()?, Money::from_minor(850, GBP));

    Ok(())
}

#[test]
fn weighted_item_with_filled_two_for_one() -> TestResult {
    let mut basket = Basket::new(GBP);

    basket.add_pricing_strategy(WeightedPricingStrategy::new());
    basket.add_pricing_strategy(QuantityPromoPricingStrategy::new(2, 1));
    basket.add_promotion(StrategyKind::Weighted, YOGURT)?;
    basket.add_promotion(StrategyKind::QuantityPromo, CHEESE)?;
    basket.add_items([
        weighted(YOGURT, 500, Decimal::new(7, 1)),
        item(CHEESE, 500),
        item(CHEESE, 500),
    ])?;

    assert_eq!(basket.total()?, Money::from_minor(850, GBP));

    Ok(())
}

#[test]
fn two_promotions_plus_unpromoted_items() -> TestResult {
    let mut basket = Basket::new(GBP);

    basket.add_pricing_strategy(WeightedPricingStrategy::new());
    basket.add_pricing_strategy(QuantityPromoPricingStrategy::new(2, 1));
    basket.add_promotions(StrategyKind::QuantityPromo, [YOGURT, CHEESE])?;
    basket.add_promotion(StrategyKind::Weighted, MILK)?;
    basket.add_items([
        item(YOGURT, 500),
        item(YOGURT, 500),
        item(CHEESE, 300),
        item(CHEESE, 300),
        weighted(MILK, 100, Decimal::new(3, 0)),
        item(SANDWICH, 100),
        item(SANDWICH, 100),
        item(SANDWICH, 100),
        item(SANDWICH, 100),
    ])?;

    assert_eq!(basket.total()?, Money::from_minor(1500, GBP));

    let receipt = basket.receipt()?;
    let priced_by: Vec<(&str, StrategyKind)> = receipt
        .charges()
        .iter()
        .map(|charge| (charge.name(), charge.kind()))
        .collect();

    assert_eq!(
        priced_by,
        vec![
            (MILK, StrategyKind::Weighted),
            (YOGURT, StrategyKind::QuantityPromo),
            (CHEESE, StrategyKind::QuantityPromo),
            (SANDWICH, StrategyKind::Simple),
        ]
    );

    Ok(())
}

#[test]
fn item_eligible_for_two_promotions_is_priced_once() -> TestResult {
    let mut basket = Basket::new(GBP);

    basket.add_pricing_strategy(WeightedPricingStrategy::with_limit(2));
    basket.add_pricing_strategy(QuantityPromoPricingStrategy::with_limit(2, 1, 1));
    basket.add_promotion(StrategyKind::Weighted, YOGURT)?;
    basket.add_promotion(StrategyKind::QuantityPromo, YOGURT)?;
    basket.add_items([
        weighted(YOGURT, 500, Decimal::new(7, 1)),
        weighted(YOGURT, 500, Decimal::new(7, 1)),
        item(CHEESE, 300),
        item(CHEESE, 300),
    ])?;

    assert_eq!(basket.total()?, Money::from_minor(1300, GBP));

    Ok(())
}

#[test]
fn weighted_limit_leaves_overflow_at_full_price() -> TestResult {
    let mut basket = Basket::new(GBP);

    basket.add_pricing_strategy(WeightedPricingStrategy::with_limit(1));
    basket.add_pricing_strategy(QuantityPromoPricingStrategy::new(2, 1));
    basket.add_promotion(StrategyKind::Weighted, YOGURT)?;
    basket.add_promotion(StrategyKind::QuantityPromo, YOGURT)?;
    basket.add_items([
        weighted(YOGURT, 500, Decimal::new(7, 1)),
        weighted(YOGURT, 500, Decimal::new(7, 1)),
        weighted(YOGURT, 500, Decimal::new(7, 1)),
    ])?;

    // One weighed by the weighted strategy, the other two at full price: the
    // quantity promotion never sees a group already claimed.
    assert_eq!(basket.total()?, Money::from_minor(1050, GBP));

    let receipt = basket.receipt()?;
    let quantities: Vec<(StrategyKind, usize)> = receipt
        .charges()
        .iter()
        .map(|charge| (charge.kind(), charge.quantity()))
        .collect();

    assert_eq!(
        quantities,
        vec![(StrategyKind::Weighted, 1), (StrategyKind::Simple, 2)]
    );

    Ok(())
}

#[test]
fn zero_weighted_limit_keeps_group_from_later_promotions() -> TestResult {
    let mut basket = Basket::new(GBP);

    basket.add_pricing_strategy(WeightedPricingStrategy::with_limit(0));
    basket.add_pricing_strategy(QuantityPromoPricingStrategy::new(2, 1));
    basket.add_promotion(StrategyKind::Weighted, YOGURT)?;
    basket.add_promotion(StrategyKind::QuantityPromo, YOGURT)?;
    basket.add_items([item(YOGURT, 500), item(YOGURT, 500)])?;

    assert_eq!(basket.total()?, Money::from_minor(1000, GBP));

    let receipt = basket.receipt()?;
    let quantities: Vec<(StrategyKind, usize)> = receipt
        .charges()
        .iter()
        .map(|charge| (charge.kind(), charge.quantity()))
        .collect();

    assert_eq!(quantities, vec![(StrategyKind::Simple, 2)]);

    Ok(())
}

#[test]
fn oversized_pay_count_is_a_pricing_error() -> TestResult {
    let mut basket = Basket::new(GBP);

    basket.add_pricing_strategy(QuantityPromoPricingStrategy::new(2, usize::MAX));
    basket.add_promotion(StrategyKind::QuantityPromo, YOGURT)?;
    basket.add_items((0..4).map(|_| item(YOGURT, 500)))?;

    assert_eq!(
        basket.total(),
        Err(BasketError::Pricing(PricingError::BundleOverflow))
    );

    Ok(())
}

#[test]
fn receipt_matches_total_and_savings() -> TestResult {
    let mut basket = Basket::new(GBP);

    basket.add_pricing_strategy(QuantityPromoPricingStrategy::new(3, 2));
    basket.add_promotion(StrategyKind::QuantityPromo, SANDWICH)?;
    basket.add_items((0..3).map(|_| item(SANDWICH, 250)))?;
    basket.add_item(item(MILK, 100))?;

    let receipt = basket.receipt()?;

    assert_eq!(receipt.total(), basket.total()?);
    assert_eq!(receipt.subtotal(), basket.subtotal()?);
    assert_eq!(receipt.savings()?, Money::from_minor(250, GBP));

    Ok(())
}

#[test]
fn promotion_before_registration_fails() {
    let mut basket = Basket::new(GBP);

    assert_eq!(
        basket.add_promotions(StrategyKind::QuantityPromo, [YOGURT, CHEESE]),
        Err(BasketError::StrategyNotRegistered(
            StrategyKind::QuantityPromo
        ))
    );
}
