use super::Value;
use indexmap::IndexMap;

/// A SQL statement with named parameters.
///
/// Parameters are referenced in the SQL text as `@name`. They keep the order
/// in which they were bound.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Statement {
    pub sql: String,
    pub params: IndexMap<String, Value>,
}

impl Statement {
    pub fn new(sql: impl Into<String>) -> Statement {
        Statement {
            sql: sql.into(),
            params: IndexMap::new(),
        }
    }

    /// Binds a parameter, replacing any previous value for `name`.
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<Value>) -> Statement {
        self.params.insert(name.into(), value.into());
        self
    }
}

impl From<&str> for Statement {
    fn from(sql: &str) -> Statement {
        Statement::new(sql)
    }
}

impl From<String> for Statement {
    fn from(sql: String) -> Statement {
        Statement::new(sql)
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.sql)
    }
}
