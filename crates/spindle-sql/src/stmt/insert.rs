use super::{Statement, Value};
use spindle_core::Mutation;

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,
    pub columns: Vec<String>,
    pub values: Vec<Value>,
}

impl Insert {
    pub(crate) fn from_mutation(mutation: &Mutation) -> Insert {
        Insert {
            table: mutation.table.clone(),
            columns: mutation.columns.clone(),
            values: mutation.values.clone(),
        }
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Statement {
        Statement::Insert(value)
    }
}
