use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};
use spindle_core::{stmt::Value as CoreValue, Error, Result};

/// Bridges spindle values and SQLite's storage classes.
#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Value {
        Value(value)
    }
}

impl Value {
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Reads a column value. SQLite is dynamically typed, so the storage class
    /// decides the variant.
    pub fn from_sql(value: ValueRef<'_>) -> Result<Value> {
        let core_value = match value {
            ValueRef::Null => CoreValue::Null,
            ValueRef::Integer(v) => CoreValue::I64(v),
            ValueRef::Real(v) => CoreValue::F64(v),
            ValueRef::Text(v) => {
                CoreValue::String(String::from_utf8(v.to_vec()).map_err(Error::client)?)
            }
            ValueRef::Blob(v) => CoreValue::Bytes(v.to_vec()),
        };

        Ok(Value(core_value))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match &self.0 {
            CoreValue::Null => ToSqlOutput::Owned(SqlValue::Null),
            CoreValue::Bool(v) => ToSqlOutput::Owned(SqlValue::Integer(*v as i64)),
            CoreValue::I64(v) => ToSqlOutput::Owned(SqlValue::Integer(*v)),
            CoreValue::F64(v) => ToSqlOutput::Owned(SqlValue::Real(*v)),
            CoreValue::String(v) => ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes())),
            CoreValue::Bytes(v) => ToSqlOutput::Borrowed(ValueRef::Blob(&v[..])),
        })
    }
}
