use serde::{Deserialize, Serialize};

use crate::record::RawRecord;
use crate::types::Fingerprint;

/// The unit of pipeline output.
///
/// Constructed only by the validator and immutable afterwards. Field order
/// here is the on-disk record log shape. The lie occupies the last statement
/// position by construction, so `lie_position == statements.len() - 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub id: u64,
    pub statements: Vec<String>,
    pub lie_position: usize,
    pub entry_hash: Fingerprint,
    pub original_columns: RawRecord,
}

impl CanonicalRecord {
    pub fn lie(&self) -> &str {
        &self.statements[self.lie_position]
    }

    pub fn truths(&self) -> &[String] {
        &self.statements[..self.lie_position]
    }
}
