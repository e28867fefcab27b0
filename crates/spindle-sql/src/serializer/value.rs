use super::{Formatter, Params, ToSql};

use spindle_core::stmt::Value;

/// Values are never inlined into the SQL text; each one becomes a placeholder.
impl ToSql for &Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let placeholder = f.params.push(self);
        placeholder.to_sql(f);
    }
}
