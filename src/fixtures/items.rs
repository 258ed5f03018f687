//! Item Fixtures

use rust_decimal::Decimal;
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{fixtures::FixtureError, items::Item};

/// Item Fixture
#[derive(Debug, Deserialize)]
pub struct ItemFixture {
    /// Item name
    pub name: String,

    /// Unit price (e.g., "2.99 GBP")
    pub price: String,

    /// Weight or quantity multiplier (e.g., "0.7"), one if absent
    #[serde(default)]
    pub multiplier: Option<String>,

    /// Number of identical items to add, one if absent
    #[serde(default)]
    pub count: Option<usize>,
}

impl ItemFixture {
    /// Build the items this fixture describes.
    ///
    /// # Errors
    ///
    /// Returns an error if the price or multiplier cannot be parsed.
    pub fn try_into_items(self) -> Result<Vec<Item<'static>>, FixtureError> {
        let (amount, currency) = parse_price(&self.price)?;
        let unit_price = Money::from_decimal(amount, currency);

        let multiplier = self
            .multiplier
            .as_deref()
            .map_or(Ok(Decimal::ONE), parse_multiplier)?;

        let count = self.count.unwrap_or(1);

        Ok((0..count)
            .map(|_| Item::weighted(self.name.as_str(), unit_price, multiplier))
            .collect())
    }
}

/// Parse price string (e.g., "2.99 GBP") into an amount and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(Decimal, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((amount, parse_currency(currency_code)?))
}

/// Parse an ISO currency code.
///
/// # Errors
///
/// Returns [`FixtureError::UnknownCurrency`] for codes other than GBP, USD and EUR.
pub fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    match code.trim() {
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(FixtureError::UnknownCurrency(other.to_string())),
    }
}

/// Parse a decimal multiplier (e.g., "0.7").
///
/// # Errors
///
/// Returns [`FixtureError::InvalidMultiplier`] if the value is not a decimal number.
pub fn parse_multiplier(s: &str) -> Result<Decimal, FixtureError> {
    s.trim()
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidMultiplier(s.to_string()))
}
