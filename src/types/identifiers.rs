use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content fingerprint of a statement vector.
///
/// Computed over the canonical JSON encoding of the statements (compact,
/// UTF-8, non-ASCII preserved verbatim), so two vectors with the same values
/// in the same order always fingerprint identically, on every platform.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn from_statements(statements: &[String]) -> Result<Self, serde_json::Error> {
        let encoded = serde_json::to_vec(statements)?;

        let mut hasher = Sha256::new();
        hasher.update(&encoded);

        let hash = hasher.finalize();
        Ok(Fingerprint(hex::encode(hash)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
