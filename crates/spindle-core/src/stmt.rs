mod key;
pub use key::{Key, KeySet};

mod row;
pub use row::Row;

mod row_stream;
pub use row_stream::RowStream;

mod statement;
pub use statement::Statement;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;
