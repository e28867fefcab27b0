use super::Operation;

use crate::stmt;

#[derive(Debug, Clone)]
pub struct QuerySql {
    /// The SQL query to execute. Must not write.
    pub stmt: stmt::Statement,

    /// The maximum number of rows the backend should return, if bounded.
    pub limit: Option<usize>,
}

impl From<QuerySql> for Operation {
    fn from(value: QuerySql) -> Operation {
        Operation::QuerySql(value)
    }
}
