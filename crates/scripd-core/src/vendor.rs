use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a SQL dialect variant inside a template document (e.g. `mysql`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vendor(String);

impl Vendor {
    /// Key of the dialect-agnostic variant every template must carry
    pub const DEFAULT: &'static str = "default";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT
    }
}

impl Default for Vendor {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl From<&str> for Vendor {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Vendor {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
