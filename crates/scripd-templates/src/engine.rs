//! Substitution engine
//!
//! Renders a token sequence against the attribute map of one declaration.
//! Literal tokens always survive. Placeholders substitute their attribute, turn
//! into an upper-cased keyword when the attribute is `true`, or vanish when it is
//! `false` or absent. A vanishing placeholder takes an `=` directly in front of it
//! along, so `ENGINE = {engine}` never renders as a dangling `ENGINE =`.

use scripd_core::{AttributeMap, CrudAction, KindRegistry, Result, ScripdError, attribute_key, is_set, lookup};
use serde_json::Value;

use crate::loader::TemplateLoader;
use crate::token::Token;

const FRAGMENT_SEPARATOR: &str = ", ";

/// Renders declarations and object definers through their templates
#[derive(Debug)]
pub struct SubstitutionEngine {
    loader: TemplateLoader,
    registry: KindRegistry,
}

impl SubstitutionEngine {
    pub fn new(loader: TemplateLoader, registry: KindRegistry) -> Self {
        Self { loader, registry }
    }

    pub fn loader(&self) -> &TemplateLoader {
        &self.loader
    }

    pub fn loader_mut(&mut self) -> &mut TemplateLoader {
        &mut self.loader
    }

    pub fn registry(&self) -> &KindRegistry {
        &self.registry
    }

    /// Renders one declaration through its `<action>-<kind>` template
    pub fn render_declaration(
        &self,
        action: CrudAction,
        kind: &str,
        attributes: &AttributeMap,
    ) -> Result<String> {
        let identifier = self.registry.template_identifier(action, kind);
        self.render_template(&identifier, attributes)
    }

    /// Renders one element of an object definer list through the template
    /// named after the definer
    pub fn render_definer(&self, definer: &str, attributes: &AttributeMap) -> Result<String> {
        self.render_template(definer, attributes)
    }

    pub fn render_template(&self, identifier: &str, attributes: &AttributeMap) -> Result<String> {
        let tokens = self.loader.load(identifier)?;
        self.render_tokens(&tokens, attributes)
    }

    /// Renders a parsed token sequence against an attribute map
    pub fn render_tokens(&self, tokens: &[Token], attributes: &AttributeMap) -> Result<String> {
        let mut output: Vec<String> = Vec::with_capacity(tokens.len());

        for token in tokens {
            match token {
                Token::Literal(text) => output.push(text.clone()),
                Token::Value(name) | Token::Definer(name) => match self.switched_on(attributes, name) {
                    Some(Value::Bool(true)) => output.push(name.to_uppercase()),
                    Some(value) => output.push(self.render_value(token, name, value)?),
                    None => elide(&mut output, name),
                },
                Token::Keyword(name) => match self.switched_on(attributes, name) {
                    Some(_) => output.push(name.to_uppercase()),
                    None => elide(&mut output, name),
                },
                Token::CommaLiteral(name) => match self.switched_on(attributes, name) {
                    Some(_) => output.push(format!("{FRAGMENT_SEPARATOR}{}", name.to_uppercase())),
                    None => elide(&mut output, name),
                },
            }
        }

        Ok(output.join(" "))
    }

    /// The attribute a placeholder substitutes, if it is switched on
    ///
    /// Attributes holding nested declarations belong to the walker and never
    /// fill a placeholder of their parent.
    fn switched_on<'a>(&self, attributes: &'a AttributeMap, name: &str) -> Option<&'a Value> {
        let key = attribute_key(name);
        lookup(attributes, name)
            .filter(|value| is_set(value))
            .filter(|value| !self.registry.is_nested(&key, value))
    }

    fn render_value(&self, token: &Token, name: &str, value: &Value) -> Result<String> {
        match (token, value) {
            (Token::Definer(_), Value::Array(items)) => self.expand_definer(name, items),
            (_, Value::String(s)) => Ok(s.clone()),
            (_, Value::Number(n)) => Ok(n.to_string()),
            (_, Value::Array(items)) => scalar_list(name, items),
            (_, Value::Object(_)) => Err(ScripdError::structure(format!(
                "attribute `{}` is an object and cannot be substituted",
                attribute_key(name)
            ))),
            (_, Value::Bool(_) | Value::Null) => Ok(String::new()),
        }
    }

    fn expand_definer(&self, name: &str, items: &[Value]) -> Result<String> {
        let definer = attribute_key(name);
        if !self.registry.is_definer(&definer) {
            return Err(ScripdError::structure(format!(
                "`{definer}` is not an object definer"
            )));
        }

        let fragments = items
            .iter()
            .map(|item| match item {
                Value::Object(attributes) => self.render_definer(&definer, attributes),
                other => Err(ScripdError::structure(format!(
                    "`{definer}` entries must be objects, found {other}"
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(format!("({})", fragments.join(FRAGMENT_SEPARATOR)))
    }
}

fn elide(output: &mut Vec<String>, name: &str) {
    if output.last().is_some_and(|previous| previous == "=") {
        output.pop();
    }
    tracing::trace!(placeholder = %name, "placeholder elided");
}

/// `["a", "b"]` -> `(a, b)`
fn scalar_list(name: &str, items: &[Value]) -> Result<String> {
    let values = items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(ScripdError::structure(format!(
                "attribute `{}` must list plain values, found {other}; use `[{{{name}}}]` for an object definer",
                attribute_key(name)
            ))),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(format!("({})", values.join(FRAGMENT_SEPARATOR)))
}

#[cfg(test)]
mod tests;
