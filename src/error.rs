//! Error types for dataset loading and the command-line run.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading labeled records.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The data file could not be opened or read.
    #[error("Failed to read data file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A line does not have the `label,lw,ld,rw,rd` shape.
    #[error("Malformed record on line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },
    /// The first field is not one of `R`, `L`, `B`.
    #[error("Unknown label code '{code}' on line {line}")]
    UnknownLabel { line: usize, code: String },
}

/// Errors that abort a command-line run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("Failed to read the data path from standard input: {0}")]
    Prompt(std::io::Error),
    #[error("Failed to install global tracing subscriber: {0}")]
    Logging(String),
    #[error("No records found in {0}")]
    EmptyDataset(PathBuf),
}
