use super::{key_filter, Statement, Value};
use spindle_core::{Mutation, Result};

/// `UPDATE table SET ... WHERE key = ...`.
///
/// Key columns are assigned too; writing a key to its current value is a
/// no-op, and it keeps the statement valid when only key columns are given.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,
    pub assignments: Vec<(String, Value)>,
    pub filter: Vec<(String, Value)>,
}

impl Update {
    pub(crate) fn from_mutation(mutation: &Mutation, key_columns: &[String]) -> Result<Update> {
        Ok(Update {
            table: mutation.table.clone(),
            assignments: mutation
                .assignments()
                .map(|(column, value)| (column.to_string(), value.clone()))
                .collect(),
            filter: key_filter(mutation, key_columns)?,
        })
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Statement {
        Statement::Update(value)
    }
}
