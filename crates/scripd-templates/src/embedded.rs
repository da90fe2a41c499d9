//! Built-in template library compiled into the binary

use scripd_core::{Result, ScripdError};

use crate::repository::{TemplateDocument, TemplateSource};

macro_rules! templates {
    ($($name:literal),* $(,)?) => {
        &[$(($name, include_str!(concat!("../templates/", $name, ".jsyn")))),*]
    };
}

static TEMPLATES: &[(&str, &str)] = templates![
    "create-database",
    "alter-database",
    "drop-database",
    "create-table",
    "alter-table",
    "drop-table",
    "create-view",
    "alter-view",
    "drop-view",
    "create-index",
    "alter-index",
    "drop-index",
    "create-trigger",
    "alter-trigger",
    "drop-trigger",
    "create-function",
    "alter-function",
    "drop-function",
    "create-stored-procedure",
    "alter-stored-procedure",
    "drop-stored-procedure",
    "create-storage",
    "alter-storage",
    "drop-storage",
    "create-security",
    "alter-security",
    "drop-security",
    "columns",
    "add-column",
    "foreign-key",
];

/// The templates shipped with scripd
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    pub fn identifiers() -> impl Iterator<Item = &'static str> {
        TEMPLATES.iter().map(|(name, _)| *name)
    }
}

impl TemplateSource for EmbeddedSource {
    fn fetch(&self, identifier: &str) -> Result<TemplateDocument> {
        let (_, source) = TEMPLATES
            .iter()
            .find(|(name, _)| *name == identifier)
            .ok_or_else(|| ScripdError::TemplateNotFound(identifier.to_string()))?;
        TemplateDocument::from_json_str(source)
    }
}
