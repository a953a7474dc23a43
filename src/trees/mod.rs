//! Decision tree induction: impurity, split selection and the tree itself.

pub mod decision_tree;
pub mod impurity;
pub mod split;

pub use decision_tree::{DecisionTree, Node, TreeBuilder, build_tree, predict};
pub use split::{SplitPredicate, ThresholdSource};
