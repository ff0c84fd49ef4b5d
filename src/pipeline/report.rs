use serde::{Deserialize, Serialize};

/// Machine-readable summary of one ingestion run.
///
/// Always returned to the caller; written out as the report artifact only
/// when artifact production is enabled, in which case `output_files` lists
/// the literal names of the log, archive, index, and report files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingReport {
    pub original_file: String,
    pub processed_entries: usize,
    pub duplicates_removed: usize,
    pub invalid_entries: usize,
    pub output_files: Vec<String>,
}
