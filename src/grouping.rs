//! Grouping and membership helpers for presentation-layer consumers.
//!
//! Read-only views over the surviving records; nothing here feeds back into
//! the pipeline.

use std::collections::{BTreeMap, BTreeSet};

use crate::record::CanonicalRecord;

/// Records bucketed by the value of one raw input field.
#[derive(Debug, Clone, Default)]
pub struct RecordGroups {
    groups: BTreeMap<String, Vec<CanonicalRecord>>,
}

impl RecordGroups {
    /// Group records by `field`'s raw value. Records missing the field, or
    /// carrying only whitespace in it, land under `fallback`.
    pub fn by_field(records: &[CanonicalRecord], field: &str, fallback: &str) -> Self {
        let mut groups: BTreeMap<String, Vec<CanonicalRecord>> = BTreeMap::new();
        for record in records {
            let key = record
                .original_columns
                .get(field)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .unwrap_or(fallback);
            groups.entry(key.to_string()).or_default().push(record.clone());
        }
        Self { groups }
    }

    pub fn get(&self, key: &str) -> &[CanonicalRecord] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Group keys in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Membership set over every statement in a batch.
#[derive(Debug, Clone, Default)]
pub struct StatementCatalog {
    statements: BTreeSet<String>,
}

impl StatementCatalog {
    pub fn from_records(records: &[CanonicalRecord]) -> Self {
        let statements = records
            .iter()
            .flat_map(|record| record.statements.iter().cloned())
            .collect();
        Self { statements }
    }

    pub fn contains(&self, statement: &str) -> bool {
        self.statements.contains(statement)
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
