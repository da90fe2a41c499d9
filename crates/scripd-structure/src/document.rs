//! Structure documents
//!
//! A structure document is an ordered JSON object whose keys name object kinds
//! (`table`, `view-group`, ...). Key order decides statement order, so documents
//! keep their source order when decoded.

use scripd_core::{AttributeMap, Result, ScripdError};
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructureDocument {
    root: AttributeMap,
}

impl StructureDocument {
    pub fn new(root: AttributeMap) -> Self {
        Self { root }
    }

    /// Wraps an in-memory attribute tree. The root must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(ScripdError::structure(format!(
                "structure document must be an object, found {other}"
            ))),
        }
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        let root: AttributeMap = serde_json::from_str(source)?;
        Ok(Self { root })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "decoding structure document");
        Self::from_json_str(&source)
    }

    /// Decodes a document, yielding an empty one when the text is not a JSON object
    pub fn decode_lenient(source: &str) -> Self {
        Self::from_json_str(source).unwrap_or_else(|error| {
            tracing::warn!(%error, "structure document did not decode, using an empty document");
            Self::default()
        })
    }

    pub fn attributes(&self) -> &AttributeMap {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

impl From<AttributeMap> for StructureDocument {
    fn from(root: AttributeMap) -> Self {
        Self::new(root)
    }
}
