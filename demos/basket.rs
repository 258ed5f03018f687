//! Basket Example
//!
//! This example prices a basket loaded from a fixture set and prints its receipt.
//!
//! Use `-f` to load a fixture set by name
//! Use `--fixtures-dir` to load fixture sets from another directory
//! Set `RUST_LOG=till=debug` to trace how each strategy priced the basket

use std::io;

use anyhow::Result;

use clap::Parser;
use till::{fixtures::Fixture, utils::ExampleBasketArgs};
use tracing_subscriber::EnvFilter;

/// Basket Example
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = ExampleBasketArgs::parse();

    let basket = Fixture::with_base_path(&args.fixtures_dir).basket(&args.fixture)?;
    let receipt = basket.receipt()?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    receipt.write_to(&mut handle)?;

    Ok(())
}
