//! Mutation descriptors and the builders that produce them.
//!
//! Building a mutation is pure: nothing here talks to the backend. The
//! backend enforces the write semantics when a mutation is applied:
//!
//! * [`Op::Insert`] fails if a row with the same key exists.
//! * [`Op::Update`] fails if no row has the key.
//! * [`Op::InsertOrUpdate`] creates the row or overwrites the given columns.
//! * [`Op::Delete`] of a missing key is a no-op.

use crate::{
    stmt::{Key, KeySet, Value},
    Error, Result,
};

/// A single write against one table.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    pub table: String,
    pub op: Op,

    /// Columns written by insert / update / insert-or-update. Empty for deletes.
    pub columns: Vec<String>,

    /// One value per column, in the same order.
    pub values: Vec<Value>,

    /// Rows targeted by a delete. `None` for the other operations.
    pub keys: Option<KeySet>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Insert,
    Update,
    InsertOrUpdate,
    Delete,
}

impl Mutation {
    /// Builds a write mutation from parallel column and value lists.
    ///
    /// Lists of different lengths, or [`Op::Delete`], are an
    /// [invalid struct](Error::is_invalid_struct) error.
    pub fn write(
        table: impl Into<String>,
        op: Op,
        columns: Vec<String>,
        values: Vec<Value>,
    ) -> Result<Mutation> {
        let table = table.into();

        if op == Op::Delete {
            return Err(Error::invalid_struct(format!(
                "delete from `{table}` needs a key; use `Mutation::delete`"
            )));
        }

        if columns.len() != values.len() {
            return Err(Error::invalid_struct(format!(
                "write to `{table}` has {} columns but {} values",
                columns.len(),
                values.len()
            )));
        }

        Ok(Mutation {
            table,
            op,
            columns,
            values,
            keys: None,
        })
    }

    pub fn insert(
        table: impl Into<String>,
        columns: Vec<String>,
        values: Vec<Value>,
    ) -> Result<Mutation> {
        Mutation::write(table, Op::Insert, columns, values)
    }

    pub fn update(
        table: impl Into<String>,
        columns: Vec<String>,
        values: Vec<Value>,
    ) -> Result<Mutation> {
        Mutation::write(table, Op::Update, columns, values)
    }

    pub fn insert_or_update(
        table: impl Into<String>,
        columns: Vec<String>,
        values: Vec<Value>,
    ) -> Result<Mutation> {
        Mutation::write(table, Op::InsertOrUpdate, columns, values)
    }

    /// Deletes the row identified by `key`.
    pub fn delete(table: impl Into<String>, key: impl Into<Key>) -> Mutation {
        Mutation {
            table: table.into(),
            op: Op::Delete,
            columns: vec![],
            values: vec![],
            keys: Some(KeySet::Key(key.into())),
        }
    }

    /// Deletes every row of `table`.
    pub fn delete_all(table: impl Into<String>) -> Mutation {
        Mutation {
            table: table.into(),
            op: Op::Delete,
            columns: vec![],
            values: vec![],
            keys: Some(KeySet::All),
        }
    }

    pub fn is_delete(&self) -> bool {
        self.op == Op::Delete
    }

    /// Iterates the written `(column, value)` pairs.
    pub fn assignments(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }
}

/// One delete per key, all targeting `table`.
pub fn delete_many<K>(table: &str, keys: impl IntoIterator<Item = K>) -> Vec<Mutation>
where
    K: Into<Key>,
{
    keys.into_iter()
        .map(|key| Mutation::delete(table, key))
        .collect()
}

/// One delete-all per table, in the given order.
pub fn truncate<T>(tables: impl IntoIterator<Item = T>) -> Vec<Mutation>
where
    T: Into<String>,
{
    tables.into_iter().map(Mutation::delete_all).collect()
}
