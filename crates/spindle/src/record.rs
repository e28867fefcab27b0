//! Extracting column names and values from caller-supplied records.

use crate::{
    stmt::{Row, Value},
    Error, Result,
};

use std::sync::Arc;

/// A value that can be written to a table as one row.
///
/// `#[derive(Model)]` implements this for structs: every field becomes a
/// column, in declaration order, named after the field unless overridden with
/// `#[column("name")]`. [`Row`] and JSON objects are records too, for data
/// whose shape is only known at runtime.
///
/// Extraction is all-or-nothing: an error means no columns are usable.
pub trait Record {
    /// The column names, in a stable order.
    fn columns(&self) -> Result<Vec<String>>;

    /// One value per requested column, in the requested order.
    ///
    /// Requesting a column the record has no field for is an
    /// [invalid struct](Error::is_invalid_struct) error.
    fn values(&self, columns: &[String]) -> Result<Vec<Value>>;
}

/// Returns every column of `record` together with its value.
pub fn extract<R: Record + ?Sized>(record: &R) -> Result<(Vec<String>, Vec<Value>)> {
    let columns = record.columns()?;
    let values = record.values(&columns)?;
    Ok((columns, values))
}

impl<T: Record + ?Sized> Record for &T {
    fn columns(&self) -> Result<Vec<String>> {
        (**self).columns()
    }

    fn values(&self, columns: &[String]) -> Result<Vec<Value>> {
        (**self).values(columns)
    }
}

impl<T: Record + ?Sized> Record for &mut T {
    fn columns(&self) -> Result<Vec<String>> {
        (**self).columns()
    }

    fn values(&self, columns: &[String]) -> Result<Vec<Value>> {
        (**self).values(columns)
    }
}

impl<T: Record + ?Sized> Record for Box<T> {
    fn columns(&self) -> Result<Vec<String>> {
        (**self).columns()
    }

    fn values(&self, columns: &[String]) -> Result<Vec<Value>> {
        (**self).values(columns)
    }
}

impl<T: Record + ?Sized> Record for Arc<T> {
    fn columns(&self) -> Result<Vec<String>> {
        (**self).columns()
    }

    fn values(&self, columns: &[String]) -> Result<Vec<Value>> {
        (**self).values(columns)
    }
}

impl Record for Row {
    fn columns(&self) -> Result<Vec<String>> {
        let columns = self.columns();

        for (i, column) in columns.iter().enumerate() {
            if columns[..i].contains(column) {
                return Err(Error::invalid_struct(format!(
                    "row has duplicate column `{column}`"
                )));
            }
        }

        Ok(columns.to_vec())
    }

    fn values(&self, columns: &[String]) -> Result<Vec<Value>> {
        columns
            .iter()
            .map(|column| {
                self.columns()
                    .iter()
                    .position(|c| c == column)
                    .map(|i| self.values()[i].clone())
                    .ok_or_else(|| {
                        Error::invalid_struct(format!("row has no column `{column}`"))
                    })
            })
            .collect()
    }
}

/// Only JSON objects are records. Keys are columns and every value must be a
/// scalar: null, bool, number or string.
impl Record for serde_json::Value {
    fn columns(&self) -> Result<Vec<String>> {
        Ok(as_object(self)?.keys().cloned().collect())
    }

    fn values(&self, columns: &[String]) -> Result<Vec<Value>> {
        let object = as_object(self)?;

        columns
            .iter()
            .map(|column| match object.get(column) {
                Some(value) => json_scalar(column, value),
                None => Err(Error::invalid_struct(format!(
                    "object has no field `{column}`"
                ))),
            })
            .collect()
    }
}

fn as_object(value: &serde_json::Value) -> Result<&serde_json::Map<String, serde_json::Value>> {
    use serde_json::Value as Json;

    let kind = match value {
        Json::Object(object) => return Ok(object),
        Json::Null => "null",
        Json::Bool(_) => "a bool",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
    };

    Err(Error::invalid_struct(format!(
        "expected an object, got {kind}"
    )))
}

fn json_scalar(column: &str, value: &serde_json::Value) -> Result<Value> {
    use serde_json::Value as Json;

    Ok(match value {
        Json::Null => Value::Null,
        Json::Bool(v) => Value::Bool(*v),
        Json::String(v) => Value::String(v.clone()),
        Json::Number(n) => {
            if let Some(v) = n.as_i64() {
                Value::I64(v)
            } else if n.is_f64() {
                // `is_f64` guarantees `as_f64` succeeds.
                Value::F64(n.as_f64().unwrap_or_default())
            } else {
                return Err(Error::invalid_struct(format!(
                    "field `{column}` is out of range: {n}"
                )));
            }
        }
        Json::Array(_) | Json::Object(_) => {
            return Err(Error::invalid_struct(format!(
                "field `{column}` holds a nested value"
            )))
        }
    })
}
