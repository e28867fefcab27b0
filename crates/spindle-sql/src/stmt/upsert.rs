use super::{is_key_column, key_filter, Insert, Statement};
use spindle_core::{Mutation, Result};

/// An insert that overwrites the non-key columns of an existing row.
#[derive(Debug, Clone, PartialEq)]
pub struct Upsert {
    pub insert: Insert,

    /// Columns identifying the conflicting row.
    pub conflict: Vec<String>,

    /// Columns overwritten on conflict. Empty when only key columns are
    /// written, in which case an existing row is left untouched.
    pub overwrite: Vec<String>,
}

impl Upsert {
    pub(crate) fn from_mutation(mutation: &Mutation, key_columns: &[String]) -> Result<Upsert> {
        // Validates that every key column is present.
        key_filter(mutation, key_columns)?;

        Ok(Upsert {
            insert: Insert::from_mutation(mutation),
            conflict: key_columns.to_vec(),
            overwrite: mutation
                .columns
                .iter()
                .filter(|column| !is_key_column(column, key_columns))
                .cloned()
                .collect(),
        })
    }
}

impl From<Upsert> for Statement {
    fn from(value: Upsert) -> Statement {
        Statement::Upsert(value)
    }
}
