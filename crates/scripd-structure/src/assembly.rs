//! Statement assembly

use scripd_core::DEFAULT_DELIMITER;

/// Generated statements in traversal order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedSql {
    statements: Vec<String>,
}

impl GeneratedSql {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_statements(statements: Vec<String>) -> Self {
        Self { statements }
    }

    pub fn push(&mut self, statement: impl Into<String>) {
        self.statements.push(statement.into());
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Joins all statements with `delimiter`
    pub fn join(&self, delimiter: &str) -> String {
        self.statements.join(delimiter)
    }

    /// Joins all statements with the default `"; \n"` delimiter
    pub fn script(&self) -> String {
        self.join(DEFAULT_DELIMITER)
    }

    pub fn into_statements(self) -> Vec<String> {
        self.statements
    }
}

impl From<Vec<String>> for GeneratedSql {
    fn from(statements: Vec<String>) -> Self {
        Self::from_statements(statements)
    }
}
