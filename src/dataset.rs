//! Reading labeled records from comma-separated text.
//!
//! Each non-blank line holds `label_code,left_weight,left_distance,right_weight,right_distance`,
//! for example `R,1,1,1,2`.

use crate::common_types::{Label, Record};
use crate::error::DatasetError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

const FIELDS_PER_LINE: usize = 5;

/// Parses one line. `line_number` is 1-based and only used in errors.
pub fn parse_record(line: &str, line_number: usize) -> Result<Record, DatasetError> {
    let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    if fields.len() != FIELDS_PER_LINE {
        return Err(DatasetError::MalformedLine {
            line: line_number,
            reason: format!("expected {FIELDS_PER_LINE} fields, found {}", fields.len()),
        });
    }

    let label = Label::from_code(fields[0]).ok_or_else(|| DatasetError::UnknownLabel {
        line: line_number,
        code: fields[0].to_string(),
    })?;

    let mut values = [0i64; 4];
    for (slot, raw) in values.iter_mut().zip(&fields[1..]) {
        *slot = raw.parse().map_err(|e| DatasetError::MalformedLine {
            line: line_number,
            reason: format!("'{raw}' is not an integer: {e}"),
        })?;
    }

    Ok(Record::new(label, values[0], values[1], values[2], values[3]))
}

/// Reads every non-blank line of `reader` as a record.
pub fn read_records<R: BufRead>(reader: R, origin: &Path) -> Result<Vec<Record>, DatasetError> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| DatasetError::Io {
            path: origin.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_record(&line, idx + 1)?);
    }
    Ok(records)
}

/// Opens and reads the data file at `path`.
pub fn load_records(path: &Path) -> Result<Vec<Record>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_records(BufReader::new(file), path)?;
    debug!(path = %path.display(), records = records.len(), "records loaded");
    Ok(records)
}
