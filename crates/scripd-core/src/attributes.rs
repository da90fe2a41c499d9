//! Attribute lookup for declarations
//!
//! A declaration is a JSON object. Placeholders in templates name attributes with
//! spaces (`{primary key}`) while documents spell the key with hyphens
//! (`"primary-key"`).

use serde_json::Value;

/// Ordered attribute map of one declaration
pub type AttributeMap = serde_json::Map<String, Value>;

/// Maps a placeholder name to the attribute key it refers to
pub fn attribute_key(name: &str) -> String {
    name.replace(' ', "-")
}

/// Looks up the attribute a placeholder refers to. `null` counts as absent.
pub fn lookup<'a>(attributes: &'a AttributeMap, name: &str) -> Option<&'a Value> {
    attributes
        .get(&attribute_key(name))
        .filter(|value| !value.is_null())
}

/// Whether a value switches its placeholder on
///
/// `false`, `null` and the empty string are off; every other value is on,
/// including `0` and empty lists. Keywords and value placeholders share this
/// rule, so a `[default] {default}` pair renders or vanishes as a whole.
pub fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(_) | Value::Array(_) | Value::Object(_) => true,
    }
}
