pub mod cursor;
pub use cursor::Cursor;

pub mod db;
pub use db::Db;

pub mod driver;

mod model;
pub use model::Model;

pub mod record;
pub use record::Record;

pub mod stmt;
pub use stmt::{Key, Primitive, Row, Statement, Value};

pub use spindle_core::{bail, err, mutation, Config, Error, Mutation, Result};

pub use spindle_macros::Model;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        stmt::{Primitive, Row, Value},
        Error, Model, Record, Result,
    };
    pub use std::{string::String, vec::Vec};

    /// Loads one field of a derived model from its column.
    pub fn load_column<T: Primitive>(row: &mut Row, column: &str) -> Result<T> {
        let value = row.take(column)?;
        T::load(value).map_err(|err| err.context(format!("column `{column}`")))
    }

    /// The error returned when a derived record is asked for a column none of
    /// its fields map to.
    pub fn unknown_column(model: &str, column: &str) -> Error {
        Error::invalid_struct(format!("`{model}` has no field for column `{column}`"))
    }
}
