//! Decision tree induction with randomized GINI splits, and inference.

use crate::common_types::{Attribute, Label, Record};
use crate::trees::impurity::class_counts;
use crate::trees::split::{ThresholdSource, SplitPredicate, best_split};
use tracing::{debug, trace};

/// A node of the induced tree. Internal nodes always have both children.
#[derive(Debug, Clone)]
pub enum Node {
    Leaf { label: Label },
    Internal {
        predicate: SplitPredicate,
        left_child: Box<Node>,
        right_child: Box<Node>,
    },
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left_child, right_child, .. } => {
                1 + left_child.depth().max(right_child.depth())
            }
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left_child, right_child, .. } => {
                left_child.leaf_count() + right_child.leaf_count()
            }
        }
    }
}

/// Recursive tree induction.
///
/// - `min_leaf_size`: a record set of at most this many records becomes a leaf.
/// - `reuse_attributes`: when `false`, the attribute chosen at a node is not
///   offered again to the nodes below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeBuilder {
    min_leaf_size: usize,
    reuse_attributes: bool,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        TreeBuilder::new(None, None)
    }
}

impl TreeBuilder {
    pub const DEFAULT_MIN_LEAF_SIZE: usize = 1;
    pub const DEFAULT_REUSE_ATTRIBUTES: bool = true;

    pub fn new(min_leaf_size: Option<usize>, reuse_attributes: Option<bool>) -> Self {
        TreeBuilder {
            min_leaf_size: min_leaf_size.unwrap_or(Self::DEFAULT_MIN_LEAF_SIZE),
            reuse_attributes: reuse_attributes.unwrap_or(Self::DEFAULT_REUSE_ATTRIBUTES),
        }
    }

    pub fn min_leaf_size(&self) -> usize {
        self.min_leaf_size
    }

    pub fn reuse_attributes(&self) -> bool {
        self.reuse_attributes
    }

    /// Builds a tree over all four attributes. An empty record set gives no tree.
    pub fn build<S>(&self, records: &[Record], source: &mut S) -> Option<DecisionTree>
    where
        S: ThresholdSource + ?Sized,
    {
        if records.is_empty() {
            return None;
        }
        let root = self.induce(records, &Attribute::ALL, source, 0);
        let tree = DecisionTree { root };
        debug!(
            records = records.len(),
            depth = tree.depth(),
            leaves = tree.leaf_count(),
            "decision tree built"
        );
        Some(tree)
    }

    /// Whether `records` should become a leaf given its non-constant attributes.
    pub fn should_stop(&self, records: &[Record], non_constant: &[Attribute]) -> bool {
        if records.len() <= self.min_leaf_size {
            return true;
        }
        if non_constant.is_empty() {
            return true;
        }
        match records.first() {
            Some(reference) => records.iter().all(|r| reference.same_label(r)),
            None => true,
        }
    }

    /// Recursively induces the subtree for `records`.
    ///
    /// # Panics
    ///
    /// Panics if the stopping check lets through a set with no candidate split,
    /// which would mean the builder's own invariants are broken.
    pub fn induce<S>(
        &self,
        records: &[Record],
        attributes: &[Attribute],
        source: &mut S,
        depth: usize,
    ) -> Node
    where
        S: ThresholdSource + ?Sized,
    {
        let non_constant = non_constant_attributes(records, attributes);

        if self.should_stop(records, &non_constant) {
            let label = class_counts(records).majority();
            trace!(depth, records = records.len(), %label, "leaf");
            return Node::Leaf { label };
        }

        let split = best_split(records, &non_constant, source)
            .expect("stopping check guarantees a non-empty record set and attribute pool");
        debug!(
            depth,
            records = records.len(),
            attribute = %split.attribute,
            threshold = split.predicate.threshold,
            impurity = split.impurity,
            left = split.left.len(),
            right = split.right.len(),
            "split"
        );

        let child_attributes: Vec<Attribute> = if self.reuse_attributes {
            non_constant
        } else {
            non_constant.into_iter().filter(|&a| a != split.attribute).collect()
        };

        let left_child = self.induce(&split.left, &child_attributes, source, depth + 1);
        let right_child = self.induce(&split.right, &child_attributes, source, depth + 1);

        Node::Internal {
            predicate: split.predicate,
            left_child: Box::new(left_child),
            right_child: Box::new(right_child),
        }
    }
}

/// The attributes whose projected value is not the same for every record.
/// Every attribute is constant over an empty or single-record set.
pub fn non_constant_attributes(records: &[Record], attributes: &[Attribute]) -> Vec<Attribute> {
    attributes
        .iter()
        .copied()
        .filter(|attribute| match records.first() {
            Some(first) => {
                let reference = attribute.project(first);
                records.iter().any(|r| attribute.project(r) != reference)
            }
            None => false,
        })
        .collect()
}

/// Builds a tree with the default builder settings.
pub fn build_tree<S>(records: &[Record], source: &mut S) -> Option<DecisionTree>
where
    S: ThresholdSource + ?Sized,
{
    TreeBuilder::default().build(records, source)
}

/// An induced tree; read-only once built.
#[derive(Debug, Clone)]
pub struct DecisionTree {
    root: Node,
}

impl DecisionTree {
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Descends from the root following the split predicates.
    pub fn predict(&self, record: &Record) -> Label {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { label } => return *label,
                Node::Internal { predicate, left_child, right_child } => {
                    node = if predicate.test(record) { left_child.as_ref() } else { right_child.as_ref() };
                }
            }
        }
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }
}

/// Prediction for a possibly absent tree.
pub fn predict(tree: Option<&DecisionTree>, record: &Record) -> Option<Label> {
    tree.map(|t| t.predict(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_builder_new() {
        let builder = TreeBuilder::new(Some(3), Some(false));
        assert_eq!(builder.min_leaf_size(), 3);
        assert!(!builder.reuse_attributes());

        let defaults = TreeBuilder::new(None, None);
        assert_eq!(defaults.min_leaf_size(), TreeBuilder::DEFAULT_MIN_LEAF_SIZE);
        assert_eq!(defaults.reuse_attributes(), TreeBuilder::DEFAULT_REUSE_ATTRIBUTES);
        assert_eq!(defaults, TreeBuilder::default());
    }

    #[test]
    fn test_build_empty_gives_no_tree() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(build_tree(&[], &mut rng).is_none());
        assert_eq!(predict(None, &Record::new(Label::Left, 1, 1, 1, 1)), None);
    }

    #[test]
    fn test_non_constant_uses_numeric_equality() {
        // Same label everywhere, so record-level comparison would call these equal.
        let records = vec![
            Record::new(Label::Left, 1, 2, 3, 4),
            Record::new(Label::Left, 1, 5, 3, 4),
        ];
        assert_eq!(
            non_constant_attributes(&records, &Attribute::ALL),
            vec![Attribute::LeftDistance]
        );
        assert!(non_constant_attributes(&records[..1], &Attribute::ALL).is_empty());
        assert!(non_constant_attributes(&[], &Attribute::ALL).is_empty());
    }

    #[test]
    fn test_should_stop_conditions() {
        let builder = TreeBuilder::default();
        let one = vec![Record::new(Label::Left, 1, 1, 1, 1)];
        assert!(builder.should_stop(&one, &Attribute::ALL));
        assert!(builder.should_stop(&[], &Attribute::ALL));

        let mixed = vec![
            Record::new(Label::Left, 1, 1, 1, 1),
            Record::new(Label::Right, 2, 2, 2, 2),
        ];
        assert!(!builder.should_stop(&mixed, &Attribute::ALL));
        assert!(builder.should_stop(&mixed, &[]));

        // Different attributes but one label: considered already pure.
        let same_label = vec![
            Record::new(Label::Balanced, 1, 1, 1, 1),
            Record::new(Label::Balanced, 5, 4, 3, 2),
        ];
        assert!(builder.should_stop(&same_label, &Attribute::ALL));

        let large_leaves = TreeBuilder::new(Some(2), None);
        assert!(large_leaves.should_stop(&mixed, &Attribute::ALL));
    }

    #[test]
    fn test_single_label_set_is_a_leaf() {
        let records: Vec<Record> = (1..=5)
            .map(|v| Record::new(Label::Balanced, v, 6 - v, v, 6 - v))
            .collect();
        let mut rng = StdRng::seed_from_u64(11);
        let tree = build_tree(&records, &mut rng).unwrap();
        assert!(tree.root().is_leaf());
        for v in 1..=5 {
            let query = Record::new(Label::Left, v, 1, 5, v);
            assert_eq!(tree.predict(&query), Label::Balanced);
        }
    }

    #[test]
    fn test_predict_manual_tree() {
        let tree = DecisionTree {
            root: Node::Internal {
                predicate: SplitPredicate::new(Attribute::RightWeight, 2.5),
                left_child: Box::new(Node::Leaf { label: Label::Left }),
                right_child: Box::new(Node::Leaf { label: Label::Right }),
            },
        };
        assert_eq!(tree.predict(&Record::new(Label::Balanced, 1, 1, 2, 1)), Label::Left);
        assert_eq!(tree.predict(&Record::new(Label::Balanced, 1, 1, 3, 1)), Label::Right);
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.leaf_count(), 2);
    }

    #[test]
    fn test_terminates_on_small_and_constant_sets() {
        let mut rng = StdRng::seed_from_u64(3);

        let single = vec![Record::new(Label::Right, 1, 2, 3, 4)];
        assert!(build_tree(&single, &mut rng).unwrap().root().is_leaf());

        let pair = vec![
            Record::new(Label::Right, 1, 2, 3, 4),
            Record::new(Label::Left, 4, 3, 2, 1),
        ];
        let tree = build_tree(&pair, &mut rng).unwrap();
        assert_eq!(tree.predict(&pair[0]), Label::Right);
        assert_eq!(tree.predict(&pair[1]), Label::Left);

        // Ten records with identical attributes: no attribute can split them.
        let constant: Vec<Record> = (0..10)
            .map(|i| Record::new(Label::ALL[i % 3], 2, 2, 2, 2))
            .collect();
        let tree = build_tree(&constant, &mut rng).unwrap();
        assert!(tree.root().is_leaf());
        // 4 RIGHT, 3 LEFT, 3 BALANCED
        assert_eq!(tree.predict(&constant[0]), Label::Right);
    }

    #[test]
    fn test_no_reuse_limits_depth() {
        let mut rng = StdRng::seed_from_u64(5);
        let records: Vec<Record> = (0..60)
            .map(|i| {
                let (a, b, c, d) = (i % 5 + 1, (i / 5) % 5 + 1, (i * 7) % 5 + 1, (i * 3) % 5 + 1);
                let label = match (a * b).cmp(&(c * d)) {
                    std::cmp::Ordering::Greater => Label::Left,
                    std::cmp::Ordering::Less => Label::Right,
                    std::cmp::Ordering::Equal => Label::Balanced,
                };
                Record::new(label, a, b, c, d)
            })
            .collect();
        let builder = TreeBuilder::new(None, Some(false));
        let tree = builder.build(&records, &mut rng).unwrap();
        // Each path can use each of the four attributes at most once.
        assert!(tree.depth() <= Attribute::ALL.len());
    }

    /// Returns the upper bound for the first `upper_draws` draws, then the lower bound.
    struct UpperThenLower {
        upper_draws: usize,
    }

    impl ThresholdSource for UpperThenLower {
        fn draw(&mut self, lo: f64, hi: f64) -> f64 {
            if self.upper_draws > 0 {
                self.upper_draws -= 1;
                hi
            } else {
                lo
            }
        }
    }

    #[test]
    fn test_empty_partition_becomes_default_leaf() {
        let records = vec![
            Record::new(Label::Left, 5, 5, 1, 1),
            Record::new(Label::Right, 1, 1, 5, 5),
        ];
        // One draw per attribute at the root: every record goes left.
        let mut source = UpperThenLower { upper_draws: Attribute::ALL.len() };
        let root = TreeBuilder::default().induce(&records, &Attribute::ALL, &mut source, 0);

        let Node::Internal { predicate, left_child, right_child } = &root else {
            panic!("expected an internal root, got {root:?}");
        };
        assert_eq!(predicate.attribute, Attribute::LeftWeight);
        assert_eq!(predicate.threshold, 5.0);
        assert!(matches!(**right_child, Node::Leaf { label: Label::Right }));

        // The left child holds both records and separates them with the lower bound.
        let tree = DecisionTree { root: (**left_child).clone() };
        assert!(!tree.root().is_leaf());
        assert_eq!(tree.predict(&records[0]), Label::Left);
        assert_eq!(tree.predict(&records[1]), Label::Right);
    }
}
