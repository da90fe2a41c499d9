//! Object kinds, object definers and crud actions
//!
//! The registry holds the naming conventions of a structure document: which keys
//! name declarations, which attributes hold definer lists, how group keys are
//! spelled and where the crud action lives. It is built once and handed to the
//! loader and the walker.

use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::attributes::AttributeMap;
use crate::error::{Result, ScripdError};

/// Database objects that can be manipulated with `create`, `alter` and `drop`
pub const OBJECT_KINDS: [&str; 10] = [
    "database",
    "table",
    "table-group",
    "view",
    "index",
    "trigger",
    "function",
    "stored-procedure",
    "storage",
    "security",
];

/// Attributes whose value is a list of sub-declarations with their own template
pub const OBJECT_DEFINERS: [&str; 3] = ["columns", "add-column", "foreign-key"];

pub const GROUP_SUFFIX: &str = "-group";

pub const CRUD_ACTION_KEY: &str = "crud-action";

/// Prefix older documents put in front of kind and `crud-action` keys (`":table"`)
pub const LEGACY_SIGIL: char = ':';

/// DDL action requested by a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrudAction {
    Create,
    Alter,
    Drop,
}

impl CrudAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrudAction::Create => "create",
            CrudAction::Alter => "alter",
            CrudAction::Drop => "drop",
        }
    }
}

impl fmt::Display for CrudAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CrudAction {
    type Err = ScripdError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "create" => Ok(CrudAction::Create),
            "alter" => Ok(CrudAction::Alter),
            "drop" => Ok(CrudAction::Drop),
            other => Err(ScripdError::structure(format!(
                "unknown crud-action `{other}`"
            ))),
        }
    }
}

/// Naming conventions of structure documents
#[derive(Debug, Clone)]
pub struct KindRegistry {
    kinds: Vec<String>,
    definers: Vec<String>,
    group_suffix: String,
    crud_action_key: String,
}

impl Default for KindRegistry {
    fn default() -> Self {
        Self {
            kinds: OBJECT_KINDS.iter().map(|k| k.to_string()).collect(),
            definers: OBJECT_DEFINERS.iter().map(|d| d.to_string()).collect(),
            group_suffix: GROUP_SUFFIX.to_string(),
            crud_action_key: CRUD_ACTION_KEY.to_string(),
        }
    }
}

impl KindRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an extra object definer on top of the built-in ones
    pub fn with_definer(mut self, definer: impl Into<String>) -> Self {
        let definer = definer.into();
        if !self.definers.contains(&definer) {
            self.definers.push(definer);
        }
        self
    }

    pub fn kinds(&self) -> &[String] {
        &self.kinds
    }

    pub fn definers(&self) -> &[String] {
        &self.definers
    }

    pub fn group_suffix(&self) -> &str {
        &self.group_suffix
    }

    /// Returns the kind a document key names, without its legacy sigil, if the
    /// kind is recognized
    pub fn recognize<'a>(&self, key: &'a str) -> Option<&'a str> {
        let kind = strip_sigil(key);
        self.kinds.iter().any(|k| k == kind).then_some(kind)
    }

    pub fn is_kind(&self, key: &str) -> bool {
        self.recognize(key).is_some()
    }

    pub fn is_definer(&self, name: &str) -> bool {
        self.definers.iter().any(|d| d == name)
    }

    /// Returns the base key of a group key (`table-group` -> `table`). The suffix
    /// must sit at the very end of the key.
    pub fn group_base<'a>(&self, key: &'a str) -> Option<&'a str> {
        strip_sigil(key).strip_suffix(self.group_suffix.as_str())
    }

    /// Whether an attribute of a declaration opens a nested document level
    pub fn is_nested(&self, key: &str, value: &Value) -> bool {
        match value {
            Value::Object(_) => self.is_kind(key),
            Value::Array(_) => self
                .group_base(key)
                .is_some_and(|base| self.is_kind(base)),
            _ => false,
        }
    }

    /// Reads the crud action of a declaration
    ///
    /// Returns `Ok(None)` when the declaration carries no crud action at all.
    pub fn crud_action(&self, attributes: &AttributeMap) -> Result<Option<CrudAction>> {
        let value = attributes.get(&self.crud_action_key).or_else(|| {
            attributes.get(&format!("{}{}", LEGACY_SIGIL, self.crud_action_key))
        });
        match value {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(action)) => action.parse().map(Some),
            Some(other) => Err(ScripdError::structure(format!(
                "`{}` must be a string, found {other}",
                self.crud_action_key
            ))),
        }
    }

    /// Template identifier for a declaration: `<action>-<kind>`
    pub fn template_identifier(&self, action: CrudAction, kind: &str) -> String {
        format!("{}-{}", action.as_str(), strip_sigil(kind))
    }
}

fn strip_sigil(key: &str) -> &str {
    key.strip_prefix(LEGACY_SIGIL).unwrap_or(key)
}
