//! Content fingerprints for stored queries.
//!
//! A fingerprint is a SHA-256 digest over everything a [`MonitorQuery`]
//! carries except its ID. Two definitions with the same fingerprint are
//! treated as unchanged, so a monitor can skip re-indexing them without
//! comparing the full text.
//!
//! The byte layout fed to the hasher is:
//!
//! ```text
//! len(query) || query
//! 0x00                                   (no highlight query)
//! 0x01 || len(highlight) || highlight    (highlight query present)
//! for each metadata entry in key order:
//!     len(key) || key || len(value) || value
//! ```
//!
//! where `len` is the UTF-8 byte length as a big-endian `u64`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::error::{Result, VigilError};
use crate::monitor::query::MonitorQuery;

/// Length of a fingerprint in bytes.
pub const FINGERPRINT_LEN: usize = 32;

const HIGHLIGHT_ABSENT: u8 = 0x00;
const HIGHLIGHT_PRESENT: u8 = 0x01;

/// A fixed-width content digest of a [`MonitorQuery`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryFingerprint([u8; FINGERPRINT_LEN]);

impl QueryFingerprint {
    /// Wrap raw digest bytes.
    pub fn from_bytes(bytes: [u8; FINGERPRINT_LEN]) -> Self {
        QueryFingerprint(bytes)
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.0
    }

    /// Lowercase hex encoding of the digest.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a hex encoded digest.
    pub fn from_hex(s: &str) -> Result<Self> {
        let decoded =
            hex::decode(s).map_err(|e| VigilError::parse(format!("invalid fingerprint: {e}")))?;
        let bytes: [u8; FINGERPRINT_LEN] = decoded.try_into().map_err(|v: Vec<u8>| {
            VigilError::parse(format!(
                "invalid fingerprint length: expected {FINGERPRINT_LEN} bytes, got {}",
                v.len()
            ))
        })?;
        Ok(QueryFingerprint(bytes))
    }
}

impl fmt::Display for QueryFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for QueryFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("QueryFingerprint")
            .field(&self.to_hex())
            .finish()
    }
}

impl FromStr for QueryFingerprint {
    type Err = VigilError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for QueryFingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for QueryFingerprint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Compute the content fingerprint of a query.
///
/// A fresh hasher is created for every call; nothing is shared between
/// invocations, so this is safe to call from any number of threads.
pub fn compute(query: &MonitorQuery) -> QueryFingerprint {
    let mut hasher = Sha256::new();

    update_str(&mut hasher, query.query());

    match query.highlight_query() {
        Some(highlight) => {
            hasher.update([HIGHLIGHT_PRESENT]);
            update_str(&mut hasher, highlight);
        }
        None => hasher.update([HIGHLIGHT_ABSENT]),
    }

    for (key, value) in query.metadata() {
        update_str(&mut hasher, key);
        update_str(&mut hasher, value);
    }

    QueryFingerprint(hasher.finalize().into())
}

fn update_str(hasher: &mut Sha256, s: &str) {
    hasher.update((s.len() as u64).to_be_bytes());
    hasher.update(s.as_bytes());
}
