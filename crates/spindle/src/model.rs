use crate::{stmt::Row, Result};

/// A type that can be loaded from a query row.
///
/// Implemented by `#[derive(Model)]`. Fields are matched to row columns by
/// name: an exact match first, then an ASCII case-insensitive one.
pub trait Model: Sized {
    /// Load an instance of the model, populating fields using the given row.
    fn load(row: Row) -> Result<Self>;
}

impl Model for Row {
    fn load(row: Row) -> Result<Row> {
        Ok(row)
    }
}
