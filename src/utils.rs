//! Utils

use clap::Parser;

/// Arguments for the basket examples
#[derive(Debug, Parser)]
pub struct ExampleBasketArgs {
    /// Fixture set to use for the basket & strategies
    #[clap(short, long, default_value = "kata")]
    pub fixture: String,

    /// Directory holding the fixture sets
    #[clap(long, default_value = "./fixtures")]
    pub fixtures_dir: String,
}
