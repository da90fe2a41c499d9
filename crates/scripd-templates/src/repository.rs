//! Template documents and where they come from

use scripd_core::{DEFAULT_TEMPLATE_EXTENSION, Result, ScripdError, Vendor};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// A jsyn document: vendor name -> raw token sequence
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TemplateDocument {
    variants: HashMap<String, Vec<String>>,
}

impl TemplateDocument {
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Token sequence for a vendor, falling back to `default`
    pub fn variant(&self, vendor: &Vendor) -> Option<&[String]> {
        self.variants
            .get(vendor.as_str())
            .or_else(|| self.variants.get(Vendor::DEFAULT))
            .map(Vec::as_slice)
    }

    pub fn has_vendor(&self, vendor: &Vendor) -> bool {
        self.variants.contains_key(vendor.as_str())
    }

    pub fn vendors(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }
}

/// Somewhere template documents can be fetched from by identifier
/// (`create-table`, `columns`, ...)
pub trait TemplateSource: fmt::Debug + Send + Sync {
    /// Fetches and decodes the document for an identifier
    ///
    /// Fails with `TemplateNotFound` when the source has no such document.
    fn fetch(&self, identifier: &str) -> Result<TemplateDocument>;
}

/// Templates stored as `<dir>/<identifier>.<extension>` files
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
    extension: String,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extension: DEFAULT_TEMPLATE_EXTENSION.to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    fn path_for(&self, identifier: &str) -> PathBuf {
        self.dir.join(format!("{identifier}.{}", self.extension))
    }
}

impl TemplateSource for DirectorySource {
    fn fetch(&self, identifier: &str) -> Result<TemplateDocument> {
        let path = self.path_for(identifier);
        if !path.is_file() {
            return Err(ScripdError::TemplateNotFound(path.display().to_string()));
        }
        tracing::debug!(path = %path.display(), "reading template");
        let source = std::fs::read_to_string(&path)?;
        TemplateDocument::from_json_str(&source)
    }
}
