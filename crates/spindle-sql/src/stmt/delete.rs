use super::{require_key, KeySet, Statement, Value};
use spindle_core::{Error, Mutation, Result};

/// `DELETE FROM table [WHERE key = ...]`. An empty filter deletes every row.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: String,
    pub filter: Vec<(String, Value)>,
}

impl Delete {
    pub(crate) fn from_mutation(mutation: &Mutation, key_columns: &[String]) -> Result<Delete> {
        let filter = match &mutation.keys {
            Some(KeySet::All) => vec![],
            Some(KeySet::Key(key)) => {
                require_key(mutation, key_columns)?;

                if key.len() != key_columns.len() {
                    return Err(Error::invalid_struct(format!(
                        "key for `{}` has {} values but the primary key has {} columns",
                        mutation.table,
                        key.len(),
                        key_columns.len()
                    )));
                }

                key_columns
                    .iter()
                    .cloned()
                    .zip(key.values().iter().cloned())
                    .collect()
            }
            None => {
                return Err(Error::invalid_struct(format!(
                    "delete from `{}` has no key",
                    mutation.table
                )))
            }
        };

        Ok(Delete {
            table: mutation.table.clone(),
            filter,
        })
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Statement {
        Statement::Delete(value)
    }
}
