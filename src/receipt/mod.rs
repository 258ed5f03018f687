//! Receipt

use std::{fmt::Write, io};

use rusty_money::{Money, MoneyError, iso::Currency};
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    pricing::{Charge, PricingError, total_charged},
    strategies::Charges,
};

/// Errors that can occur when rendering a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Wrapper for money errors.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// Final receipt for a priced basket.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    /// One line per strategy and item group, in pricing order
    charges: Charges<'a>,

    /// Total cost with every item at full price
    subtotal: Money<'a, Currency>,

    /// Total amount paid for all items
    total: Money<'a, Currency>,

    /// Currency used for all monetary values
    currency: &'static Currency,
}

impl<'a> Receipt<'a> {
    /// Build a receipt from the charges produced by pricing a basket.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the charges cannot be summed.
    pub fn from_charges(
        charges: Charges<'a>,
        currency: &'static Currency,
    ) -> Result<Self, PricingError> {
        let subtotal = charges
            .iter()
            .try_fold(Money::from_minor(0, currency), |acc, charge| {
                acc.add(charge.base())
            })?;

        let total = total_charged(&charges, currency)?;

        Ok(Self {
            charges,
            subtotal,
            total,
            currency,
        })
    }

    /// Lines of the receipt
    pub fn charges(&self) -> &[Charge<'a>] {
        &self.charges
    }

    /// Total cost with every item at full price
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.subtotal
    }

    /// Total amount paid for all items
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Get the currency of the receipt.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Calculate the savings made by applying promotions.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.subtotal.sub(self.total)
    }

    /// Writes the receipt as a table followed by a summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the receipt cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["Item", "Qty", "Pricing", "Base Price", "Charged", "Savings"]);

        for charge in &self.charges {
            let savings = if price_is_unchanged(charge) {
                String::new()
            } else {
                format!("-{}", charge.savings()?)
            };

            builder.push_record([
                charge.name().to_string(),
                charge.quantity().to_string(),
                charge.kind().to_string(),
                format!("{}", charge.base()),
                format!("{}", charge.charged()),
                savings,
            ]);
        }

        write_receipt_table(&mut out, builder)?;

        write_receipt_summary(&mut out, self)
    }
}

/// Returns true if the charge is the undiscounted price.
fn price_is_unchanged(charge: &Charge<'_>) -> bool {
    charge.charged() == charge.base()
}

fn write_receipt_table(out: &mut impl io::Write, builder: Builder) -> Result<(), ReceiptError> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(1..2), Alignment::right());
    table.modify(Columns::new(3..6), Alignment::right());

    writeln!(out, "\n{table}").map_err(|_err| ReceiptError::IO)
}

fn write_receipt_summary(
    out: &mut impl io::Write,
    receipt: &Receipt<'_>,
) -> Result<(), ReceiptError> {
    let rows = [
        ("Subtotal:", format!("{}", receipt.subtotal())),
        ("Total:", format!("{}", receipt.total())),
        ("Savings:", format!("{}", receipt.savings()?)),
    ];

    let value_width = rows.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

    let mut summary = String::new();

    for (label, value) in rows {
        writeln!(summary, " {label:>9}  {value:>value_width$}")
            .map_err(|_err| ReceiptError::IO)?;
    }

    writeln!(out, "{summary}").map_err(|_err| ReceiptError::IO)
}
