use rand::rngs::StdRng;
use rand::SeedableRng;

use statement_core::grouping::{RecordGroups, StatementCatalog};
use statement_core::pipeline::validate_rows;
use statement_core::quiz::build_rounds;
use statement_core::record::{CanonicalRecord, RawRecord, RowError};
use statement_core::schema::Schema;

fn test_schema() -> Schema {
    let headers: Vec<String> = ["Truth 1", "Truth 2", "Lie", "Category"]
        .iter()
        .map(|name| name.to_string())
        .collect();
    Schema::detect(&headers).unwrap()
}

fn row(truth1: &str, truth2: &str, lie: &str, category: &str) -> Result<RawRecord, RowError> {
    let mut record = RawRecord::new();
    record.insert("Truth 1", truth1);
    record.insert("Truth 2", truth2);
    record.insert("Lie", lie);
    if !category.is_empty() {
        record.insert("Category", category);
    }
    Ok(record)
}

fn sample_records() -> Vec<CanonicalRecord> {
    let rows = vec![
        row("a1", "a2", "a3", "Science"),
        row("b1", "b2", "b3", "Animals"),
        row("c1", "c2", "c3", "Science"),
        row("d1", "d2", "d3", ""),
    ];
    validate_rows(&test_schema(), rows).records
}

#[test]
fn groups_by_field_value_with_fallback_key() {
    let records = sample_records();
    let groups = RecordGroups::by_field(&records, "Category", "General");

    let keys: Vec<&str> = groups.keys().collect();
    assert_eq!(keys, ["Animals", "General", "Science"]);

    assert_eq!(groups.get("Science").len(), 2);
    assert_eq!(groups.get("Animals").len(), 1);
    assert_eq!(groups.get("General").len(), 1);
    assert!(groups.get("Nope").is_empty());
}

#[test]
fn grouping_preserves_record_order_within_a_group() {
    let records = sample_records();
    let groups = RecordGroups::by_field(&records, "Category", "General");

    let science = groups.get("Science");
    assert_eq!(science[0].statements, ["a1", "a2", "a3"]);
    assert_eq!(science[1].statements, ["c1", "c2", "c3"]);
}

#[test]
fn catalog_answers_membership_over_every_statement() {
    let records = sample_records();
    let catalog = StatementCatalog::from_records(&records);

    assert_eq!(catalog.len(), 12);
    assert!(catalog.contains("a1"));
    assert!(catalog.contains("d3"));
    assert!(!catalog.contains("not a statement"));
}

#[test]
fn rounds_track_the_lie_through_the_shuffle() {
    let records = sample_records();
    let mut rng = StdRng::seed_from_u64(7);

    let rounds = build_rounds(&records, records.len(), &mut rng);
    assert_eq!(rounds.len(), records.len());

    for round in &rounds {
        assert_eq!(round.statements.len(), 3);

        // Match the round back to its source record by statement content.
        let mut sorted = round.statements.clone();
        sorted.sort();
        let source = records
            .iter()
            .find(|record| {
                let mut expected = record.statements.clone();
                expected.sort();
                expected == sorted
            })
            .expect("round does not match any record");

        assert_eq!(round.lie(), source.lie());
    }
}

#[test]
fn round_limit_is_respected() {
    let records = sample_records();
    let mut rng = StdRng::seed_from_u64(7);

    assert_eq!(build_rounds(&records, 2, &mut rng).len(), 2);
}

#[test]
fn no_records_means_no_rounds() {
    let mut rng = StdRng::seed_from_u64(7);
    assert!(build_rounds(&[], 5, &mut rng).is_empty());
}

#[test]
fn seeded_rounds_are_reproducible() {
    let records = sample_records();

    let first = build_rounds(&records, records.len(), &mut StdRng::seed_from_u64(42));
    let second = build_rounds(&records, records.len(), &mut StdRng::seed_from_u64(42));

    assert_eq!(first, second);
}
