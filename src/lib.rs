//! Binary decision tree classifier for balance-scale records.
//!
//! Trees are induced recursively: at each node every non-constant attribute
//! gets one random threshold, and the split with the lowest weighted GINI
//! impurity wins. The randomness comes from a caller-provided
//! [`ThresholdSource`](trees::ThresholdSource), so builds are reproducible
//! under a seeded `rand` generator.

pub mod common_types;
pub mod config;
pub mod dataset;
pub mod error;
pub mod evaluation;
pub mod logging;
pub mod synthetic;
pub mod trees;

#[cfg(feature = "python")]
mod python;

pub use common_types::{Attribute, ClassCounts, Label, Record};
pub use error::{AppError, DatasetError};
pub use evaluation::{SuccessReport, evaluate};
pub use trees::{DecisionTree, Node, SplitPredicate, ThresholdSource, TreeBuilder, build_tree, predict};
