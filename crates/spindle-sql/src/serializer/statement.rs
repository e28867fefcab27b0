use super::{Comma, Delimited, Flavor, Formatter, Ident, Params, ToSql};

use crate::stmt::{Delete, Insert, Statement, Update, Upsert, Value};

/// `"column" = ?`
struct Assign<'a>(&'a str, &'a Value);

/// `"column" = excluded."column"` or `` `column` = VALUES(`column`) ``
struct Overwrite<'a>(&'a str);

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
            Statement::Upsert(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let columns = Comma(self.columns.iter().map(Ident));
        let values = Comma(&self.values);

        fmt!(f, "INSERT INTO " Ident(&self.table) " (" columns ") VALUES (" values ")");
    }
}

impl ToSql for &Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let assignments = Comma(self.assignments.iter().map(|(c, v)| Assign(c, v)));
        let filter = Delimited(self.filter.iter().map(|(c, v)| Assign(c, v)), " AND ");

        fmt!(f, "UPDATE " Ident(&self.table) " SET " assignments " WHERE " filter);
    }
}

impl ToSql for &Upsert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, &self.insert);

        let overwrite = Comma(self.overwrite.iter().map(|c| Overwrite(c)));

        match f.serializer.flavor {
            Flavor::Mysql => {
                fmt!(f, " ON DUPLICATE KEY UPDATE ");

                if self.overwrite.is_empty() {
                    // MySQL has no DO NOTHING; assigning a key to itself is the
                    // usual stand-in.
                    let key = &self.conflict[0];
                    fmt!(f, Ident(key) " = " Ident(key));
                } else {
                    fmt!(f, overwrite);
                }
            }
            Flavor::Postgresql | Flavor::Sqlite => {
                let conflict = Comma(self.conflict.iter().map(Ident));
                fmt!(f, " ON CONFLICT (" conflict ") DO ");

                if self.overwrite.is_empty() {
                    fmt!(f, "NOTHING");
                } else {
                    fmt!(f, "UPDATE SET " overwrite);
                }
            }
        }
    }
}

impl ToSql for &Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "DELETE FROM " Ident(&self.table));

        if !self.filter.is_empty() {
            let filter = Delimited(self.filter.iter().map(|(c, v)| Assign(c, v)), " AND ");
            fmt!(f, " WHERE " filter);
        }
    }
}

impl ToSql for Assign<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, Ident(self.0) " = " self.1);
    }
}

impl ToSql for Overwrite<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let column = self.0;

        if f.serializer.is_mysql() {
            fmt!(f, Ident(column) " = VALUES(" Ident(column) ")");
        } else {
            fmt!(f, Ident(column) " = excluded." Ident(column));
        }
    }
}
