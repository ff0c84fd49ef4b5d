pub mod canonical;
pub mod raw;

pub use canonical::CanonicalRecord;
pub use raw::{RawRecord, RowError};
