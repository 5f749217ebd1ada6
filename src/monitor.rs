//! Stored query definitions and their content fingerprints.

pub mod fingerprint;
pub mod query;

pub use fingerprint::QueryFingerprint;
pub use query::MonitorQuery;
