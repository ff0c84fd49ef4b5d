use std::fs;
use std::path::{Path, PathBuf};

use statement_core::artifact::{ARCHIVE_FILE, INDEX_FILE, LOG_FILE, REPORT_FILE};
use statement_core::pipeline::{validate_rows, IngestConfig, IngestPipeline, ProcessingReport};
use statement_core::record::{RawRecord, RowError};
use statement_core::schema::Schema;
use statement_core::types::Fingerprint;
use tempfile::tempdir;

const PARIS_HASH: &str = "b76b9d60628539a3abc02b9118201c5701717e90b0755e508362df7871ce1c69";

fn science_row() -> Result<RawRecord, RowError> {
    let mut record = RawRecord::new();
    record.insert("Truth 1", "Paris is in France");
    record.insert("Truth 2", "Water boils at 100C");
    record.insert("Lie", "The sun is cold");
    record.insert("Category", "Science");
    Ok(record)
}

fn science_schema() -> Schema {
    let headers: Vec<String> = ["Truth 1", "Truth 2", "Lie", "Category"]
        .iter()
        .map(|name| name.to_string())
        .collect();
    Schema::detect(&headers).unwrap()
}

#[test]
fn fingerprint_matches_frozen_digest() {
    let statements: Vec<String> = [
        "Paris is in France",
        "Water boils at 100C",
        "The sun is cold",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let hash = Fingerprint::from_statements(&statements).unwrap();
    assert_eq!(hash.as_str(), PARIS_HASH);
}

#[test]
fn golden_record_log_line() {
    // The concrete scenario: one science row plus its exact duplicate.
    let batch = validate_rows(&science_schema(), vec![science_row(), science_row()]);

    assert_eq!(batch.records.len(), 1);
    assert_eq!(batch.duplicates_removed, 1);
    assert_eq!(batch.invalid_entries, 0);

    let record = &batch.records[0];
    assert_eq!(record.id, 1);
    assert_eq!(record.lie_position, 2);

    let line = serde_json::to_string(record).unwrap();
    let expected = format!(
        "{{\"id\":1,\
\"statements\":[\"Paris is in France\",\"Water boils at 100C\",\"The sun is cold\"],\
\"lie_position\":2,\
\"entry_hash\":\"{PARIS_HASH}\",\
\"original_columns\":{{\"Truth 1\":\"Paris is in France\",\"Truth 2\":\"Water boils at 100C\",\"Lie\":\"The sun is cold\",\"Category\":\"Science\"}}}}"
    );
    assert_eq!(line, expected);
}

#[test]
fn golden_record_field_order() {
    let batch = validate_rows(&science_schema(), vec![science_row()]);
    let json = serde_json::to_string(&batch.records[0]).unwrap();

    let id_pos = json.find("\"id\":").unwrap();
    let statements_pos = json.find("\"statements\":").unwrap();
    let lie_pos = json.find("\"lie_position\":").unwrap();
    let hash_pos = json.find("\"entry_hash\":").unwrap();
    let columns_pos = json.find("\"original_columns\":").unwrap();

    assert!(id_pos < statements_pos);
    assert!(statements_pos < lie_pos);
    assert!(lie_pos < hash_pos);
    assert!(hash_pos < columns_pos);
}

#[test]
fn golden_report_serialization() {
    let report = ProcessingReport {
        original_file: "lies.csv".to_string(),
        processed_entries: 1,
        duplicates_removed: 1,
        invalid_entries: 0,
        output_files: Vec::new(),
    };

    let json = serde_json::to_string(&report).unwrap();
    assert_eq!(
        json,
        "{\"original_file\":\"lies.csv\",\
\"processed_entries\":1,\
\"duplicates_removed\":1,\
\"invalid_entries\":0,\
\"output_files\":[]}"
    );

    let roundtrip: ProcessingReport = serde_json::from_str(&json).unwrap();
    assert_eq!(roundtrip, report);
}

#[test]
fn two_runs_produce_bit_identical_artifacts() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("lies.csv");
    fs::write(
        &input,
        "\
Truth 1,Truth 2,Lie,Category
Paris is in France,Water boils at 100C,The sun is cold,Science
Cats are mammals,Sharks are fish,Pigs can fly,Animals
",
    )
    .unwrap();

    let out_a = run_into(&input, dir.path().join("a"));
    let out_b = run_into(&input, dir.path().join("b"));

    for name in [LOG_FILE, ARCHIVE_FILE, INDEX_FILE, REPORT_FILE] {
        let bytes_a = fs::read(out_a.join(name)).unwrap();
        let bytes_b = fs::read(out_b.join(name)).unwrap();
        assert_eq!(bytes_a, bytes_b, "artifact mismatch: {name}");
    }
}

fn run_into(input: &Path, out: PathBuf) -> PathBuf {
    IngestPipeline::new(IngestConfig::writing_to(&out))
        .run(input)
        .unwrap();
    out
}
