//! Run configuration
//!
//! `scripd.toml` selects the vendor, where templates live and how statements are
//! delimited:
//!
//! ```toml
//! vendor = "mysql"
//! template_dir = "./templates"
//! template_extension = "jsyn"
//! delimiter = ";\n"
//! ```
//!
//! Every field is optional. Without `template_dir` the built-in templates are used.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, ScripdError};
use crate::vendor::Vendor;

/// Delimiter placed between generated statements
pub const DEFAULT_DELIMITER: &str = "; \n";

/// File extension of template documents in a template directory
pub const DEFAULT_TEMPLATE_EXTENSION: &str = "jsyn";

const CONFIG_FILE_NAME: &str = "scripd.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScripdConfig {
    /// Vendor variant selected from every template
    #[serde(default)]
    pub vendor: Vendor,
    /// Directory of template documents; `None` uses the built-in library
    #[serde(default)]
    pub template_dir: Option<PathBuf>,
    /// Extension of template documents inside `template_dir`
    #[serde(default = "default_template_extension")]
    pub template_extension: String,
    /// Delimiter between generated statements
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

fn default_template_extension() -> String {
    DEFAULT_TEMPLATE_EXTENSION.to_string()
}
fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

impl Default for ScripdConfig {
    fn default() -> Self {
        Self {
            vendor: Vendor::default(),
            template_dir: None,
            template_extension: default_template_extension(),
            delimiter: default_delimiter(),
        }
    }
}

impl ScripdConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| ScripdError::Configuration(e.to_string()))
    }

    /// Loads a config file. Relative `template_dir` values resolve against the
    /// directory holding the file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&source)?;
        let resolved = match (&config.template_dir, path.parent()) {
            (Some(dir), Some(parent)) if dir.is_relative() => Some(parent.join(dir)),
            _ => None,
        };
        if resolved.is_some() {
            config.template_dir = resolved;
        }
        tracing::debug!(path = %path.display(), vendor = %config.vendor, "loaded config");
        Ok(config)
    }

    /// `<config dir>/scripd/scripd.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("scripd").join(CONFIG_FILE_NAME))
    }

    /// Loads the user config if one exists, otherwise the defaults
    pub fn load_or_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn with_vendor(mut self, vendor: impl Into<Vendor>) -> Self {
        self.vendor = vendor.into();
        self
    }

    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = Some(dir.into());
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }
}
