//! CLI command implementations

use clap::Parser;

pub mod extract;

/// Extract adjective/adverb-modifying-verb training examples from a corpus
#[derive(Debug, Parser)]
#[command(name = "adjadv", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub extract: extract::ExtractArgs,
}
