use spindle::driver::Driver;
use spindle_driver_sqlite::Sqlite;

use crate::Setup;

/// Tables shared by the integration tests.
pub const SCHEMA: &str = r#"
CREATE TABLE Singers (
    SingerId INTEGER PRIMARY KEY,
    FirstName TEXT,
    LastName TEXT NOT NULL
);

CREATE TABLE Albums (
    SingerId INTEGER NOT NULL,
    AlbumId INTEGER NOT NULL,
    Title TEXT NOT NULL,
    PRIMARY KEY (SingerId, AlbumId)
);

CREATE TABLE items (
    id TEXT PRIMARY KEY,
    label TEXT NOT NULL,
    score REAL,
    active INTEGER NOT NULL,
    payload BLOB,
    type TEXT NOT NULL
);

CREATE TABLE test (
    Id TEXT PRIMARY KEY,
    Num INTEGER,
    Text TEXT
);
"#;

pub struct SetupSqlite;

impl SetupSqlite {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SetupSqlite {
    fn default() -> Self {
        Self::new()
    }
}

impl Setup for SetupSqlite {
    fn driver(&self) -> Box<dyn Driver> {
        Box::new(Sqlite::in_memory().with_init_sql(SCHEMA))
    }
}
