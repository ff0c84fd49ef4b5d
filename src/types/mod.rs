pub mod identifiers;

pub use identifiers::Fingerprint;
