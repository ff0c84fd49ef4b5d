use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::CanonicalRecord;
use crate::types::Fingerprint;

/// Reduced projection of one record, as stored in the lookup index.
/// `original_columns` is deliberately omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub statements: Vec<String>,
    pub lie_position: usize,
    pub hash: Fingerprint,
}

/// Direct keyed lookup over the record log, without re-reading the log.
/// Serializes as a single JSON object mapping string-encoded id to entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupIndex {
    entries: BTreeMap<u64, IndexEntry>,
}

impl LookupIndex {
    pub fn from_records(records: &[CanonicalRecord]) -> Self {
        let entries = records
            .iter()
            .map(|record| {
                (
                    record.id,
                    IndexEntry {
                        statements: record.statements.clone(),
                        lie_position: record.lie_position,
                        hash: record.entry_hash.clone(),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, id: u64) -> Option<&IndexEntry> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
