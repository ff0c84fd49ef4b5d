use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::record::{RawRecord, RowError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input file not found: {0}")]
    SourceNotFound(PathBuf),
    #[error("input file has a header but no data rows: {0}")]
    EmptySource(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// A fully materialized input file: header names plus every data row in
/// input order. Rows that failed to parse are carried as errors so the
/// validator can count them without aborting the batch.
#[derive(Debug)]
pub struct LoadedSource {
    pub headers: Vec<String>,
    pub rows: Vec<Result<RawRecord, RowError>>,
}

/// Load the whole file at once. No partial loads: a missing file or a
/// header-only file fails before any downstream stage runs.
pub fn load_rows(path: &Path) -> Result<LoadedSource, LoadError> {
    if !path.exists() {
        return Err(LoadError::SourceNotFound(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let row = match result {
            Ok(record) => Ok(RawRecord::from_pairs(
                headers
                    .iter()
                    .cloned()
                    .zip(record.iter().map(|value| value.to_string())),
            )),
            Err(e) => Err(RowError::Malformed(e.to_string())),
        };
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(LoadError::EmptySource(path.to_path_buf()));
    }

    Ok(LoadedSource { headers, rows })
}
