//! Template loader with a run-scoped cache

use parking_lot::RwLock;
use scripd_core::{Result, ScripdError, Vendor};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::embedded::EmbeddedSource;
use crate::repository::{DirectorySource, TemplateSource};
use crate::token::{Token, parse_tokens};

/// Resolves template identifiers to parsed token sequences for one vendor
///
/// Each `(identifier, vendor)` pair is fetched, vendor-resolved and classified
/// once; later lookups share the cached tokens.
#[derive(Debug)]
pub struct TemplateLoader {
    source: Box<dyn TemplateSource>,
    vendor: Vendor,
    cache: RwLock<HashMap<(String, Vendor), Arc<[Token]>>>,
}

impl TemplateLoader {
    pub fn new(source: impl TemplateSource + 'static, vendor: Vendor) -> Self {
        Self {
            source: Box::new(source),
            vendor,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Loader over the built-in template library
    pub fn embedded(vendor: Vendor) -> Self {
        Self::new(EmbeddedSource, vendor)
    }

    /// Loader over a template directory using the default extension
    pub fn from_dir(dir: impl Into<PathBuf>, vendor: Vendor) -> Self {
        Self::new(DirectorySource::new(dir), vendor)
    }

    pub fn vendor(&self) -> &Vendor {
        &self.vendor
    }

    pub fn set_vendor(&mut self, vendor: Vendor) {
        self.vendor = vendor;
    }

    /// Swaps the template source. Cached templates from the old source are dropped.
    pub fn set_source(&mut self, source: impl TemplateSource + 'static) {
        self.source = Box::new(source);
        self.cache.write().clear();
    }

    /// Loads the token sequence of a template for the current vendor
    pub fn load(&self, identifier: &str) -> Result<Arc<[Token]>> {
        let key = (identifier.to_string(), self.vendor.clone());

        if let Some(tokens) = self.cache.read().get(&key) {
            tracing::trace!(template = %identifier, vendor = %self.vendor, "template cache hit");
            return Ok(Arc::clone(tokens));
        }

        let document = self.source.fetch(identifier)?;
        let Some(raw) = document.variant(&self.vendor) else {
            tracing::debug!(
                template = %identifier,
                vendor = %self.vendor,
                available = ?document.vendors().collect::<Vec<_>>(),
                "no usable template variant"
            );
            return Err(ScripdError::TemplateVendorMissing {
                template: identifier.to_string(),
                vendor: self.vendor.to_string(),
            });
        };
        if !document.has_vendor(&self.vendor) {
            tracing::debug!(template = %identifier, vendor = %self.vendor, "using default variant");
        }

        let tokens: Arc<[Token]> = parse_tokens(raw).into();
        tracing::debug!(
            template = %identifier,
            vendor = %self.vendor,
            token_count = tokens.len(),
            "caching template"
        );
        self.cache.write().insert(key, Arc::clone(&tokens));
        Ok(tokens)
    }

    /// Number of cached `(identifier, vendor)` entries
    pub fn cached(&self) -> usize {
        self.cache.read().len()
    }

    pub fn clear_cache(&self) {
        self.cache.write().clear();
    }
}
