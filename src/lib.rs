//! Deterministic ingestion pipeline for statement-set datasets.
//!
//! `statement-core` turns a raw tabular dataset of statement sets (several
//! true statements plus exactly one lie per row) into a deduplicated,
//! content-addressed artifact set: a JSONL record log, a gzip archive of
//! that log, an id-keyed lookup index, and a processing report. All
//! operations are deterministic — identical inputs always produce identical
//! outputs, byte-for-byte.

pub mod artifact;
pub mod compression;
pub mod grouping;
pub mod pipeline;
pub mod quiz;
pub mod record;
pub mod schema;
pub mod source;
pub mod types;
