//! GINI impurity of record sets and of candidate binary splits.

use crate::common_types::{ClassCounts, Record};
use num_traits::{Float, FromPrimitive};

/// Tallies the labels of `records`.
pub fn class_counts(records: &[Record]) -> ClassCounts {
    let mut counts = ClassCounts::new();
    for record in records {
        counts.increment(record.label());
    }
    counts
}

/// `1 - Σ (count_i / total)²` over the given counts.
///
/// An empty distribution (total of zero) has an impurity of zero rather than
/// dividing by zero.
pub fn gini_impurity<F>(counts: &[usize]) -> F
where
    F: Float + FromPrimitive,
{
    let total: usize = counts.iter().sum();
    if total == 0 {
        return F::zero();
    }
    let total_f = F::from_usize(total).unwrap_or_else(F::one);

    let mut ssp = F::zero();
    for &count in counts {
        let p = F::from_usize(count).unwrap_or_else(F::zero) / total_f;
        ssp = ssp + p * p;
    }
    F::one() - ssp
}

/// GINI impurity of the label distribution of `records`.
pub fn split_impurity<F>(records: &[Record]) -> F
where
    F: Float + FromPrimitive,
{
    gini_impurity(&class_counts(records).values())
}

/// Size-weighted impurity of a binary partition. Zero when both sides are empty.
pub fn weighted_impurity<F>(left: &[Record], right: &[Record]) -> F
where
    F: Float + FromPrimitive,
{
    let total = left.len() + right.len();
    if total == 0 {
        return F::zero();
    }
    let num_total = F::from_usize(total).unwrap_or_else(F::one);
    let num_left = F::from_usize(left.len()).unwrap_or_else(F::zero);
    let num_right = F::from_usize(right.len()).unwrap_or_else(F::zero);

    (num_left / num_total) * split_impurity::<F>(left)
        + (num_right / num_total) * split_impurity::<F>(right)
}
