//! Python bindings, built with the `python` feature.

use crate::common_types::{Label, Record};
use crate::evaluation::{SuccessReport, evaluate};
use crate::synthetic::{self, generate_records};
use crate::trees::decision_tree::{DecisionTree, TreeBuilder, predict};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;

/// A record as seen from Python: `(label_code, lw, ld, rw, rd)`.
type PyRecord = (String, i64, i64, i64, i64);

fn to_record((code, lw, ld, rw, rd): PyRecord) -> PyResult<Record> {
    let label = Label::from_code(&code).ok_or_else(|| {
        PyErr::new::<PyValueError, _>(format!("Unknown label code '{code}', expected R, L or B"))
    })?;
    Ok(Record::new(label, lw, ld, rw, rd))
}

fn as_dict(report: &SuccessReport) -> HashMap<String, (usize, usize)> {
    Label::ALL
        .iter()
        .map(|&label| {
            (
                label.name().to_string(),
                (report.correct().get(label), report.totals().get(label)),
            )
        })
        .collect()
}

#[pyclass(name = "DecisionTree")]
struct PyDecisionTree {
    builder: TreeBuilder,
    tree: Option<DecisionTree>,
    rng: StdRng,
}

#[pymethods]
impl PyDecisionTree {
    #[new]
    #[pyo3(signature = (min_leaf_size = None, reuse_attributes = None, seed = None))]
    fn new(min_leaf_size: Option<usize>, reuse_attributes: Option<bool>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        PyDecisionTree {
            builder: TreeBuilder::new(min_leaf_size, reuse_attributes),
            tree: None,
            rng,
        }
    }

    /// Builds the tree. An empty list leaves the classifier unfitted.
    fn fit(&mut self, records: Vec<PyRecord>) -> PyResult<()> {
        let records = records.into_iter().map(to_record).collect::<PyResult<Vec<_>>>()?;
        self.tree = self.builder.build(&records, &mut self.rng);
        Ok(())
    }

    /// Returns the predicted label code, or `None` when unfitted.
    fn predict(&self, record: PyRecord) -> PyResult<Option<char>> {
        let record = to_record(record)?;
        Ok(predict(self.tree.as_ref(), &record).map(Label::code))
    }

    /// Per-label `(correct, total)` over `records`, keyed by label name.
    fn score(&self, records: Vec<PyRecord>) -> PyResult<HashMap<String, (usize, usize)>> {
        let records = records.into_iter().map(to_record).collect::<PyResult<Vec<_>>>()?;
        let report = evaluate(self.tree.as_ref(), &records);
        Ok(as_dict(&report))
    }

    /// Scores the tree on `count` freshly generated records.
    fn score_synthetic(&mut self, count: usize) -> HashMap<String, (usize, usize)> {
        let records = generate_records(&mut self.rng, count);
        let report = evaluate(self.tree.as_ref(), &records);
        as_dict(&report)
    }

    #[getter]
    fn is_fitted(&self) -> bool {
        self.tree.is_some()
    }
}

/// Label code for a balance configuration.
#[pyfunction]
fn tipping_label(left_weight: i64, left_distance: i64, right_weight: i64, right_distance: i64) -> char {
    synthetic::tipping_label(left_weight, left_distance, right_weight, right_distance).code()
}

/// The name of this function must match the `lib.name` in `Cargo.toml`.
#[pymodule]
fn balance_tree(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(tipping_label, m)?)?;
    m.add_class::<PyDecisionTree>()?;
    Ok(())
}
