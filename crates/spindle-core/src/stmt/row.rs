use super::Value;
use crate::{Error, Result};
use std::sync::Arc;

/// A row returned by a query: column names plus positionally aligned values.
///
/// Rows from the same result set share their column names.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<Value>,
}

impl Row {
    /// Creates a row, checking that there is one value per column.
    pub fn new(columns: Arc<[String]>, values: Vec<Value>) -> Result<Row> {
        if columns.len() != values.len() {
            return Err(Error::invalid_result(format!(
                "row has {} columns but {} values",
                columns.len(),
                values.len()
            )));
        }

        Ok(Row { columns, values })
    }

    /// Builds a row from `(column, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Row
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let (columns, values): (Vec<String>, Vec<Value>) = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .unzip();

        Row {
            columns: columns.into(),
            values,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Finds the position of a column.
    ///
    /// An exact match wins; otherwise the first ASCII case-insensitive match is
    /// used.
    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c == column)
            .or_else(|| {
                self.columns
                    .iter()
                    .position(|c| c.eq_ignore_ascii_case(column))
            })
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.position(column).map(|i| &self.values[i])
    }

    /// Takes a column's value out of the row, leaving `Null` behind.
    pub fn take(&mut self, column: &str) -> Result<Value> {
        match self.position(column) {
            Some(i) => Ok(self.values[i].take()),
            None => Err(Error::invalid_result(format!(
                "column `{column}` missing from row"
            ))),
        }
    }
}
