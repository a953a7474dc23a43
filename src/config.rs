//! Command-line configuration for the `balance-tree` binary.

use crate::trees::decision_tree::TreeBuilder;
use clap::Parser;
use std::path::PathBuf;

/// Data file offered at the interactive prompt.
pub const DEFAULT_DATA_PATH: &str = "DECISION/balance-scale.data";

/// Train a GINI decision tree on balance-scale records and score it on
/// freshly generated configurations.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "balance-tree", version, about)]
pub struct Cli {
    /// Path to the training data; prompts on standard input when omitted
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Number of synthetic records to score the tree on
    #[arg(long, default_value_t = 500)]
    pub test_size: usize,

    /// Seed for split thresholds and synthetic records (system entropy when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Record sets of at most this size become leaves
    #[arg(long, default_value_t = TreeBuilder::DEFAULT_MIN_LEAF_SIZE)]
    pub min_leaf_size: usize,

    /// Do not reuse an attribute further down the path that split on it
    #[arg(long)]
    pub no_attribute_reuse: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn tree_builder(&self) -> TreeBuilder {
        TreeBuilder::new(Some(self.min_leaf_size), Some(!self.no_attribute_reuse))
    }
}
