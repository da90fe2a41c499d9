//! Structure walker implementation

use scripd_core::{AttributeMap, KindRegistry, Result, ScripdError};
use scripd_templates::SubstitutionEngine;
use serde_json::Value;

/// Kind whose nested objects are preceded by a `USE <name>` statement
const DATABASE_KIND: &str = "database";

/// Depth-first walker over a structure document
///
/// Each document level is walked by a pure function of that level: the walker
/// keeps no cursor, and every call returns the statements produced below it.
/// Statements of nested declarations directly follow their parent, before the
/// parent's next sibling.
#[derive(Debug, Clone, Copy)]
pub struct StructureWalker<'a> {
    engine: &'a SubstitutionEngine,
}

impl<'a> StructureWalker<'a> {
    pub fn new(engine: &'a SubstitutionEngine) -> Self {
        Self { engine }
    }

    fn registry(&self) -> &'a KindRegistry {
        self.engine.registry()
    }

    /// Renders every declaration of one document level, in key order
    pub fn walk(&self, level: &AttributeMap) -> Result<Vec<String>> {
        let mut statements = Vec::new();
        for (key, value) in level {
            statements.extend(self.walk_entry(key, value)?);
        }
        Ok(statements)
    }

    /// Renders a single `key: value` entry of a document level
    pub fn walk_entry(&self, key: &str, value: &Value) -> Result<Vec<String>> {
        let registry = self.registry();

        if let Some(base) = registry.group_base(key) {
            let Some(kind) = registry.recognize(base) else {
                tracing::trace!(key = %key, "skipping unrecognized group");
                return Ok(Vec::new());
            };
            let Value::Array(declarations) = value else {
                return Err(ScripdError::structure(format!(
                    "`{key}` must map to a list of `{kind}` declarations"
                )));
            };

            let mut statements = Vec::new();
            for declaration in declarations {
                statements.extend(self.walk_declaration(kind, declaration)?);
            }
            return Ok(statements);
        }

        match registry.recognize(key) {
            Some(kind) => self.walk_declaration(kind, value),
            None => {
                tracing::trace!(key = %key, "skipping unrecognized key");
                Ok(Vec::new())
            }
        }
    }

    /// Renders one declaration followed by everything nested inside it
    fn walk_declaration(&self, kind: &str, value: &Value) -> Result<Vec<String>> {
        let registry = self.registry();

        let Value::Object(attributes) = value else {
            return Err(ScripdError::structure(format!(
                "`{kind}` declaration must be an object, found {value}"
            )));
        };
        let action = registry.crud_action(attributes)?.ok_or_else(|| {
            ScripdError::structure(format!("`{kind}` declaration has no crud-action"))
        })?;

        let statement = self.engine.render_declaration(action, kind, attributes)?;
        tracing::debug!(kind = %kind, action = %action, "rendered declaration");
        let mut statements = vec![statement];

        let nested: Vec<(&String, &Value)> = attributes
            .iter()
            .filter(|(key, value)| registry.is_nested(key, value))
            .collect();
        if nested.is_empty() {
            return Ok(statements);
        }

        if kind == DATABASE_KIND {
            statements.push(use_statement(attributes)?);
        }
        for (key, value) in nested {
            tracing::trace!(parent = %kind, nested = %key, "descending into nested declaration");
            statements.extend(self.walk_entry(key, value)?);
        }

        Ok(statements)
    }
}

fn use_statement(database: &AttributeMap) -> Result<String> {
    match database.get("name") {
        Some(Value::String(name)) => Ok(format!("USE {name}")),
        Some(Value::Number(name)) => Ok(format!("USE {name}")),
        _ => Err(ScripdError::structure(
            "a database with nested objects needs a `name`",
        )),
    }
}
