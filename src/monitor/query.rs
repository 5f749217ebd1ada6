//! Stored query definitions.
//!
//! A [`MonitorQuery`] is the unit a reverse-search monitor stores and later
//! matches against incoming documents. Its identity (`id`, `query`,
//! `highlight_query`) drives equality and hashing, while its full content,
//! metadata included, drives the [`QueryFingerprint`] used for change
//! detection.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use vigil::monitor::query::MonitorQuery;
//!
//! let mut metadata = BTreeMap::new();
//! metadata.insert("owner".to_string(), "alerts".to_string());
//!
//! let a = MonitorQuery::with_metadata("q1", "rust AND tokio", metadata);
//! let b = MonitorQuery::new("q1", "rust AND tokio");
//!
//! // Metadata does not take part in equality...
//! assert_eq!(a, b);
//! // ...but it does change the fingerprint.
//! assert_ne!(a.fingerprint(), b.fingerprint());
//! ```

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::monitor::fingerprint::{self, QueryFingerprint};

/// A query to be stored in a monitor.
///
/// Values are immutable: there are no setters, and any change to a stored
/// definition means constructing a new `MonitorQuery`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MonitorQuery {
    id: String,
    query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    highlight_query: Option<String>,
    #[serde(default)]
    metadata: BTreeMap<String, String>,
}

impl MonitorQuery {
    /// Create a query with no highlight query and no metadata.
    pub fn new<I, Q>(id: I, query: Q) -> Self
    where
        I: Into<String>,
        Q: Into<String>,
    {
        Self::with_highlight_and_metadata(id, query, None::<String>, BTreeMap::new())
    }

    /// Create a query with a highlight query and no metadata.
    pub fn with_highlight<I, Q, H>(id: I, query: Q, highlight_query: H) -> Self
    where
        I: Into<String>,
        Q: Into<String>,
        H: Into<String>,
    {
        Self::with_highlight_and_metadata(id, query, Some(highlight_query), BTreeMap::new())
    }

    /// Create a query with metadata and no highlight query.
    pub fn with_metadata<I, Q>(id: I, query: Q, metadata: BTreeMap<String, String>) -> Self
    where
        I: Into<String>,
        Q: Into<String>,
    {
        Self::with_highlight_and_metadata(id, query, None::<String>, metadata)
    }

    /// Create a query from all of its parts.
    ///
    /// `highlight_query` is kept exactly as given: `None` and `Some("")` are
    /// different queries.
    pub fn with_highlight_and_metadata<I, Q, H>(
        id: I,
        query: Q,
        highlight_query: Option<H>,
        metadata: BTreeMap<String, String>,
    ) -> Self
    where
        I: Into<String>,
        Q: Into<String>,
        H: Into<String>,
    {
        MonitorQuery {
            id: id.into(),
            query: query.into(),
            highlight_query: highlight_query.map(Into::into),
            metadata,
        }
    }

    /// The caller-assigned ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The stored query expression.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The optional highlight query.
    pub fn highlight_query(&self) -> Option<&str> {
        self.highlight_query.as_deref()
    }

    /// The query used for highlighting: the highlight query if one was
    /// given, otherwise the main query.
    pub fn highlight_or_query(&self) -> &str {
        self.highlight_query.as_deref().unwrap_or(&self.query)
    }

    /// Read-only view of the metadata.
    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    /// Compute the content fingerprint of this query.
    ///
    /// See [`fingerprint::compute`] for the exact byte layout.
    pub fn fingerprint(&self) -> QueryFingerprint {
        fingerprint::compute(self)
    }
}

impl PartialEq for MonitorQuery {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.query == other.query
            && self.highlight_query == other.highlight_query
    }
}

impl Eq for MonitorQuery {}

impl Hash for MonitorQuery {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.query.hash(state);
        self.highlight_query.hash(state);
    }
}
