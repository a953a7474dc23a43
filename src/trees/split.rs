//! Randomized split thresholds and selection of the best attribute to split on.

use crate::common_types::{Attribute, Record};
use crate::trees::impurity::weighted_impurity;
use rand::Rng;
use tracing::trace;

/// Source of split thresholds: a uniform real in `[lo, hi]`.
pub trait ThresholdSource {
    fn draw(&mut self, lo: f64, hi: f64) -> f64;
}

impl<R: Rng + ?Sized> ThresholdSource for R {
    fn draw(&mut self, lo: f64, hi: f64) -> f64 {
        if lo >= hi {
            return lo;
        }
        self.gen_range(lo..=hi)
    }
}

/// Routes a record left when `attribute(record) <= threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitPredicate {
    pub attribute: Attribute,
    pub threshold: f64,
}

impl SplitPredicate {
    pub fn new(attribute: Attribute, threshold: f64) -> Self {
        SplitPredicate { attribute, threshold }
    }

    /// `true` sends the record to the left child.
    pub fn test(&self, record: &Record) -> bool {
        (self.attribute.project(record) as f64) <= self.threshold
    }
}

/// The winning candidate of [`best_split`] together with its partitions.
#[derive(Debug, Clone)]
pub struct BestSplit {
    pub predicate: SplitPredicate,
    pub attribute: Attribute,
    pub impurity: f64,
    pub left: Vec<Record>,
    pub right: Vec<Record>,
}

/// Draws a threshold between the smallest and largest value of `attribute`
/// over `records`. A degenerate range (min == max) yields a predicate that is
/// true for every record. Returns `None` for an empty record set.
pub fn random_split<S>(records: &[Record], attribute: Attribute, source: &mut S) -> Option<SplitPredicate>
where
    S: ThresholdSource + ?Sized,
{
    let minimum = records.iter().map(|r| attribute.project(r)).min()?;
    let maximum = records.iter().map(|r| attribute.project(r)).max()?;
    let threshold = source.draw(minimum as f64, maximum as f64);
    Some(SplitPredicate::new(attribute, threshold))
}

/// Splits `records` into (predicate true, predicate false), keeping order.
pub fn partition(records: &[Record], predicate: &SplitPredicate) -> (Vec<Record>, Vec<Record>) {
    records.iter().partition(|r| predicate.test(r))
}

/// Draws one random split per attribute and keeps the one with the smallest
/// weighted impurity. Ties keep the earliest attribute.
///
/// Returns `None` when `attributes` is empty or `records` is empty.
pub fn best_split<S>(records: &[Record], attributes: &[Attribute], source: &mut S) -> Option<BestSplit>
where
    S: ThresholdSource + ?Sized,
{
    let mut best: Option<BestSplit> = None;

    for &attribute in attributes {
        let predicate = random_split(records, attribute, source)?;
        let (left, right) = partition(records, &predicate);
        let impurity: f64 = weighted_impurity(&left, &right);
        trace!(%attribute, threshold = predicate.threshold, impurity, "candidate split");

        let improves = best.as_ref().map_or(true, |b| impurity < b.impurity);
        if improves {
            best = Some(BestSplit { predicate, attribute, impurity, left, right });
        }
    }

    best
}
