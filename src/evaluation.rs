//! Per-label accuracy of a tree over a labeled test set.

use crate::common_types::{ClassCounts, Label, Record};
use crate::trees::decision_tree::{DecisionTree, predict};
use std::fmt;

/// Totals and correct predictions for each label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuccessReport {
    totals: ClassCounts,
    correct: ClassCounts,
}

impl SuccessReport {
    pub fn totals(&self) -> &ClassCounts {
        &self.totals
    }

    pub fn correct(&self) -> &ClassCounts {
        &self.correct
    }

    /// Percentage of correct predictions for `label`, `None` without test records.
    pub fn rate(&self, label: Label) -> Option<f64> {
        let total = self.totals.get(label);
        (total > 0).then(|| self.correct.get(label) as f64 * 100.0 / total as f64)
    }

    /// Percentage over all labels, `None` for an empty test set.
    pub fn overall_rate(&self) -> Option<f64> {
        let total = self.totals.total();
        (total > 0).then(|| self.correct.total() as f64 * 100.0 / total as f64)
    }
}

impl fmt::Display for SuccessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Success rate")?;
        for (label, total) in self.totals.iter() {
            if let Some(rate) = self.rate(label) {
                writeln!(
                    f,
                    "{label} : {} ({} / {total})",
                    format_rate(rate),
                    self.correct.get(label)
                )?;
            }
        }
        Ok(())
    }
}

/// Whole numbers keep one decimal (`100.0`); other values use the shortest
/// round-tripping form.
fn format_rate(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format!("{rate:.1}")
    } else {
        format!("{rate}")
    }
}

/// Predicts every record with `tree` and tallies hits against the record's own label.
/// An absent tree never predicts correctly.
pub fn evaluate(tree: Option<&DecisionTree>, records: &[Record]) -> SuccessReport {
    let mut report = SuccessReport::default();
    for record in records {
        report.totals.increment(record.label());
        if predict(tree, record) == Some(record.label()) {
            report.correct.increment(record.label());
        }
    }
    report
}
