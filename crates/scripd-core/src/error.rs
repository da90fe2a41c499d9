//! Error types for scripd

use thiserror::Error;

/// Core error type for scripd operations
#[derive(Error, Debug)]
pub enum ScripdError {
    /// No template document exists for a derived identifier
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// The template exists but has neither the requested vendor nor `default`
    #[error("Template `{template}` has neither a `{vendor}` nor a `default` variant")]
    TemplateVendorMissing { template: String, vendor: String },

    /// The structure document cannot be rendered as given
    #[error("Structure error: {0}")]
    Structure(String),

    /// A structure or template document is not valid JSON of the expected shape
    #[error("Document decode error: {0}")]
    DocumentDecode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScripdError {
    pub fn structure(message: impl Into<String>) -> Self {
        ScripdError::Structure(message.into())
    }
}

/// Result type alias for scripd operations
pub type Result<T> = std::result::Result<T, ScripdError>;
