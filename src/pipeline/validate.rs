use std::collections::BTreeSet;

use tracing::warn;

use crate::record::{CanonicalRecord, RawRecord, RowError};
use crate::schema::Schema;
use crate::types::Fingerprint;

/// Outcome of one validation pass.
///
/// Counters are scoped to the pass; a new run always starts from zero.
#[derive(Debug, Default)]
pub struct ValidatedBatch {
    pub records: Vec<CanonicalRecord>,
    pub duplicates_removed: usize,
    pub invalid_entries: usize,
}

/// Deduplicate and number the loaded rows, in input order.
///
/// The first occurrence of a fingerprint wins; later occurrences are dropped
/// silently and counted. Row-level failures are counted and logged, never
/// fatal. Surviving ids form the dense range `1..=records.len()`.
pub fn validate_rows(schema: &Schema, rows: Vec<Result<RawRecord, RowError>>) -> ValidatedBatch {
    let mut seen: BTreeSet<Fingerprint> = BTreeSet::new();
    let mut batch = ValidatedBatch::default();

    for row in rows {
        let canonicalized = row.and_then(|raw| {
            let statements = schema.statement_vector(&raw);
            let entry_hash = Fingerprint::from_statements(&statements)?;
            Ok((raw, statements, entry_hash))
        });

        let (raw, statements, entry_hash) = match canonicalized {
            Ok(entry) => entry,
            Err(reason) => {
                warn!("skipping invalid row: {reason}");
                batch.invalid_entries += 1;
                continue;
            }
        };

        if !seen.insert(entry_hash.clone()) {
            batch.duplicates_removed += 1;
            continue;
        }

        let id = batch.records.len() as u64 + 1;
        batch.records.push(CanonicalRecord {
            id,
            lie_position: statements.len() - 1,
            statements,
            entry_hash,
            original_columns: raw,
        });
    }

    batch
}
