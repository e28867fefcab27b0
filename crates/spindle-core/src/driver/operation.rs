mod apply;
pub use apply::Apply;

mod buffer_write;
pub use buffer_write::BufferWrite;

mod query_sql;
pub use query_sql::QuerySql;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Apply a list of mutations atomically
    Apply(Apply),

    /// Run a list of mutations inside a read-write transaction
    BufferWrite(BufferWrite),

    /// Execute a read-only SQL query
    QuerySql(QuerySql),
}

impl Operation {
    pub fn is_apply(&self) -> bool {
        matches!(self, Operation::Apply(_))
    }

    pub fn is_buffer_write(&self) -> bool {
        matches!(self, Operation::BufferWrite(_))
    }

    pub fn is_query_sql(&self) -> bool {
        matches!(self, Operation::QuerySql(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Apply(_) => "apply",
            Operation::BufferWrite(_) => "buffer_write",
            Operation::QuerySql(_) => "query_sql",
        }
    }
}
