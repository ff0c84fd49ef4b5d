pub mod report;
pub mod validate;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::artifact::{ArtifactError, ArtifactWriter, REPORT_FILE};
use crate::record::CanonicalRecord;
use crate::schema::{Schema, SchemaError};
use crate::source::{self, LoadError};

pub use report::ProcessingReport;
pub use validate::{validate_rows, ValidatedBatch};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

/// Run settings. Artifact production can be disabled so the pipeline acts
/// as a pure validation step with zero filesystem effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestConfig {
    pub write_artifacts: bool,
    pub output_dir: PathBuf,
}

impl IngestConfig {
    /// Produce all four artifacts under `output_dir`.
    pub fn writing_to(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            write_artifacts: true,
            output_dir: output_dir.into(),
        }
    }

    /// Validate and report only.
    pub fn validation_only() -> Self {
        Self {
            write_artifacts: false,
            output_dir: PathBuf::new(),
        }
    }
}

/// Everything a run produces: the detected schema, the surviving records in
/// id order, and the processing report.
#[derive(Debug)]
pub struct IngestOutcome {
    pub schema: Schema,
    pub records: Vec<CanonicalRecord>,
    pub report: ProcessingReport,
}

/// IngestPipeline is single-threaded and runs to completion in one call.
pub struct IngestPipeline {
    config: IngestConfig,
}

impl IngestPipeline {
    pub fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, source_path: &Path) -> Result<IngestOutcome, IngestError> {
        // 1. Materialize the whole file; no partial loads.
        let loaded = source::load_rows(source_path)?;

        // 2. Classify header fields before touching any data row.
        let schema = Schema::detect(&loaded.headers)?;

        // 3. Canonicalize, deduplicate, number.
        let batch = validate_rows(&schema, loaded.rows);

        // 4. Artifacts, then the report naming them.
        let mut report = ProcessingReport {
            original_file: source_path.display().to_string(),
            processed_entries: batch.records.len(),
            duplicates_removed: batch.duplicates_removed,
            invalid_entries: batch.invalid_entries,
            output_files: Vec::new(),
        };

        if self.config.write_artifacts {
            let writer = ArtifactWriter::new(&self.config.output_dir);
            report.output_files = writer.write_records(&batch.records)?;
            report.output_files.push(REPORT_FILE.to_string());
            writer.write_report(&report)?;
        }

        Ok(IngestOutcome {
            schema,
            records: batch.records,
            report,
        })
    }
}
