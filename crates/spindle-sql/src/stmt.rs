mod delete;
pub use delete::Delete;

mod insert;
pub use insert::Insert;

mod update;
pub use update::Update;

mod upsert;
pub use upsert::Upsert;

pub use spindle_core::stmt::*;

use spindle_core::{mutation::Op, Error, Mutation, Result};

/// A write statement compiled from a [`Mutation`].
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Delete(Delete),
    Insert(Insert),
    Update(Update),
    Upsert(Upsert),
}

impl Statement {
    /// Compiles a mutation against a table whose primary key is made of
    /// `key_columns`.
    ///
    /// Inserts and whole-table deletes do not need the key. Every other
    /// operation locates rows by it, so a table without a primary key, or a
    /// write that does not carry every key column, is rejected.
    pub fn from_mutation(mutation: &Mutation, key_columns: &[String]) -> Result<Statement> {
        Ok(match mutation.op {
            Op::Insert => Insert::from_mutation(mutation).into(),
            Op::Update => Update::from_mutation(mutation, key_columns)?.into(),
            Op::InsertOrUpdate => Upsert::from_mutation(mutation, key_columns)?.into(),
            Op::Delete => Delete::from_mutation(mutation, key_columns)?.into(),
        })
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Statement::Update(_))
    }
}

/// Pairs each key column with the value the mutation writes to it.
///
/// Column names match the key ASCII case-insensitively, like SQL identifiers.
fn key_filter(mutation: &Mutation, key_columns: &[String]) -> Result<Vec<(String, Value)>> {
    require_key(mutation, key_columns)?;

    key_columns
        .iter()
        .map(|key| {
            mutation
                .assignments()
                .find(|(column, _)| *column == key.as_str())
                .or_else(|| {
                    mutation
                        .assignments()
                        .find(|(column, _)| column.eq_ignore_ascii_case(key))
                })
                .map(|(column, value)| (column.to_string(), value.clone()))
                .ok_or_else(|| {
                    Error::invalid_struct(format!(
                        "write to `{}` does not set key column `{key}`",
                        mutation.table
                    ))
                })
        })
        .collect()
}

fn is_key_column(column: &str, key_columns: &[String]) -> bool {
    key_columns.iter().any(|key| key.eq_ignore_ascii_case(column))
}

fn require_key(mutation: &Mutation, key_columns: &[String]) -> Result<()> {
    if key_columns.is_empty() {
        return Err(Error::invalid_struct(format!(
            "table `{}` has no primary key",
            mutation.table
        )));
    }
    Ok(())
}
