use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Scalar key-value pairs attached to a stored document, opaque to ranking.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// One stored corpus record.
///
/// The embedding length must match the dimension of the collection holding
/// the record; the stores enforce this on insert and query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Externally assigned identifier, unique within a collection.
    pub id: String,
    /// The raw text the embedding was generated from.
    pub text: String,
    /// The numerical embedding vector of the document's content.
    pub embedding: Vec<f64>,
    pub metadata: Metadata,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>, embedding: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            embedding,
            metadata: Metadata::new(),
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }
}
