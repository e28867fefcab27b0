mod primitive;
pub use primitive::Primitive;

pub use spindle_core::stmt::{Key, KeySet, Row, RowStream, Statement, Type, Value};
