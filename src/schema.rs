use thiserror::Error;

use crate::record::RawRecord;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("no truth fields found in header; available fields: {available:?}")]
    NoTruthFields { available: Vec<String> },
    #[error("no lie field found in header; available fields: {available:?}")]
    NoLieField { available: Vec<String> },
}

/// The detected mapping of input field names to their semantic role.
///
/// Classification is case-insensitive over trimmed names: every name
/// containing "truth" joins the truth list in header order; the first
/// remaining name containing "lie" becomes the lie field (later matches are
/// ignored). A name containing both substrings counts as truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    truth_fields: Vec<String>,
    lie_field: String,
}

impl Schema {
    /// Classify the header field names. Runs before any data row is read.
    pub fn detect(headers: &[String]) -> Result<Self, SchemaError> {
        let mut truth_fields = Vec::new();
        let mut lie_field: Option<String> = None;

        for name in headers {
            let lower = name.trim().to_lowercase();
            if lower.contains("truth") {
                truth_fields.push(name.clone());
            } else if lower.contains("lie") && lie_field.is_none() {
                lie_field = Some(name.clone());
            }
        }

        if truth_fields.is_empty() {
            return Err(SchemaError::NoTruthFields {
                available: headers.to_vec(),
            });
        }
        let lie_field = lie_field.ok_or_else(|| SchemaError::NoLieField {
            available: headers.to_vec(),
        })?;

        Ok(Schema {
            truth_fields,
            lie_field,
        })
    }

    pub fn truth_fields(&self) -> &[String] {
        &self.truth_fields
    }

    pub fn lie_field(&self) -> &str {
        &self.lie_field
    }

    /// Project a raw row into its statement vector: truth values in schema
    /// order, then the lie value, each trimmed. A missing field reads as the
    /// empty string — blank-but-present statements are not malformed.
    pub fn statement_vector(&self, record: &RawRecord) -> Vec<String> {
        let mut statements: Vec<String> = self
            .truth_fields
            .iter()
            .map(|field| record.get(field).unwrap_or("").trim().to_string())
            .collect();
        statements.push(
            record
                .get(&self.lie_field)
                .unwrap_or("")
                .trim()
                .to_string(),
        );
        statements
    }
}
