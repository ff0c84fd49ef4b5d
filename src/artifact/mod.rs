pub mod index;

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;

use crate::compression;
use crate::pipeline::ProcessingReport;
use crate::record::CanonicalRecord;

pub use index::{IndexEntry, LookupIndex};

pub const LOG_FILE: &str = "statements.jsonl";
pub const ARCHIVE_FILE: &str = "statements.jsonl.gz";
pub const INDEX_FILE: &str = "statements_index.json";
pub const REPORT_FILE: &str = "ingest_report.json";

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Writes the durable artifact set. This is the only component with
/// filesystem side effects; every write is a whole-file replacement.
pub struct ArtifactWriter {
    output_dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write the record log, its archive, and the lookup index, in that
    /// order. The log is fully written and synced before it is archived, so
    /// the archive never captures a partial log.
    ///
    /// Returns the artifact names written so far, in production order.
    pub fn write_records(&self, records: &[CanonicalRecord]) -> Result<Vec<String>, ArtifactError> {
        fs::create_dir_all(&self.output_dir)?;

        let log_path = self.output_dir.join(LOG_FILE);
        let mut log = fs::File::create(&log_path)?;
        for record in records {
            serde_json::to_writer(&mut log, record)?;
            log.write_all(b"\n")?;
        }
        log.sync_all()?;

        let archive_path = self.output_dir.join(ARCHIVE_FILE);
        compression::compress_file(&log_path, &archive_path)?;

        let index = LookupIndex::from_records(records);
        let f_idx = fs::File::create(self.output_dir.join(INDEX_FILE))?;
        serde_json::to_writer_pretty(&f_idx, &index)?;
        f_idx.sync_all()?;

        Ok(vec![
            LOG_FILE.to_string(),
            ARCHIVE_FILE.to_string(),
            INDEX_FILE.to_string(),
        ])
    }

    pub fn write_report(&self, report: &ProcessingReport) -> Result<(), ArtifactError> {
        fs::create_dir_all(&self.output_dir)?;
        let f = fs::File::create(self.output_dir.join(REPORT_FILE))?;
        serde_json::to_writer_pretty(&f, report)?;
        f.sync_all()?;
        Ok(())
    }
}
