mod value;
pub(crate) use value::Value;

use rusqlite::{Connection as RusqliteConnection, TransactionBehavior};
use spindle_core::{
    async_trait,
    driver::{
        operation::{Apply, BufferWrite, Operation, QuerySql},
        Config, Driver, Response,
    },
    stmt::Row,
    Error, Mutation, Result,
};
use spindle_sql as sql;
use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};
use url::Url;

/// Option naming the busy timeout, in milliseconds, applied to each connection.
pub const BUSY_TIMEOUT_OPTION: &str = "busy_timeout_ms";

/// An embedded SQLite backend.
#[derive(Debug, Clone)]
pub struct Sqlite {
    target: Target,

    /// SQL run on every new connection, e.g. to create tables.
    init_sql: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum Target {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a connection URL, `sqlite::memory:` or
    /// `sqlite:<path>`.
    pub fn new(url: impl Into<String>) -> Result<Sqlite> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_config(format!("invalid connection URL `{url_str}`: {err}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_config(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        let target = match url.path() {
            "" => {
                return Err(Error::invalid_config(format!(
                    "connection URL has no database path; url={url_str}"
                )))
            }
            ":memory:" => Target::InMemory,
            path => Target::File(PathBuf::from(path)),
        };

        Ok(Sqlite {
            target,
            init_sql: None,
        })
    }

    /// Create an in-memory SQLite database. Every connection gets its own
    /// empty database.
    pub fn in_memory() -> Sqlite {
        Sqlite {
            target: Target::InMemory,
            init_sql: None,
        }
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Sqlite {
        Sqlite {
            target: Target::File(path.as_ref().to_path_buf()),
            init_sql: None,
        }
    }

    /// Runs `sql` (any number of `;`-separated statements) right after each
    /// connection is opened.
    pub fn with_init_sql(mut self, sql: impl Into<String>) -> Sqlite {
        self.init_sql = Some(sql.into());
        self
    }

    pub fn is_in_memory(&self) -> bool {
        self.target == Target::InMemory
    }
}

#[async_trait]
impl Driver for Sqlite {
    async fn connect(&self, config: &Config) -> Result<Box<dyn spindle_core::Connection>> {
        let connection = match &self.target {
            Target::File(path) => RusqliteConnection::open(path),
            Target::InMemory => RusqliteConnection::open_in_memory(),
        }
        .map_err(Error::client)?;

        if let Some(timeout) = config.option(BUSY_TIMEOUT_OPTION) {
            let millis: u64 = timeout.parse().map_err(|_| {
                Error::invalid_config(format!(
                    "`{BUSY_TIMEOUT_OPTION}` must be a number of milliseconds; got `{timeout}`"
                ))
            })?;
            connection
                .busy_timeout(Duration::from_millis(millis))
                .map_err(Error::client)?;
        }

        if let Some(init_sql) = &self.init_sql {
            connection.execute_batch(init_sql).map_err(Error::client)?;
        }

        log::debug!(
            "sqlite connected; database={}; target={:?}",
            config.database_path(),
            self.target
        );

        Ok(Box::new(Connection::new(connection)))
    }
}

/// A single SQLite connection shared by every clone of a session.
#[derive(Debug)]
pub struct Connection {
    connection: Mutex<Option<RusqliteConnection>>,
}

impl Connection {
    fn new(connection: RusqliteConnection) -> Connection {
        Connection {
            connection: Mutex::new(Some(connection)),
        }
    }

    fn with_connection<R>(&self, f: impl FnOnce(&mut RusqliteConnection) -> Result<R>) -> Result<R> {
        let mut guard = self.connection.lock().unwrap_or_else(PoisonError::into_inner);

        match guard.as_mut() {
            Some(connection) => f(connection),
            None => Err(Error::client_message("connection is closed")),
        }
    }
}

#[async_trait]
impl spindle_core::Connection for Connection {
    async fn exec(&self, op: Operation) -> Result<Response> {
        log::debug!("sqlite exec; op={}", op.name());

        self.with_connection(|connection| match op {
            Operation::QuerySql(op) => query_sql(connection, op),
            Operation::Apply(Apply { mutations }) => {
                write(connection, TransactionBehavior::Deferred, &mutations)
            }
            Operation::BufferWrite(BufferWrite { mutations }) => {
                write(connection, TransactionBehavior::Immediate, &mutations)
            }
        })
    }

    async fn close(&self) -> Result<()> {
        let connection = self
            .connection
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        match connection {
            Some(connection) => connection.close().map_err(|(_, err)| Error::client(err)),
            None => Ok(()),
        }
    }
}

fn query_sql(connection: &mut RusqliteConnection, op: QuerySql) -> Result<Response> {
    let QuerySql { stmt, limit } = op;

    log::trace!("sqlite query; sql={}; limit={limit:?}", stmt.sql);

    let mut prepared = connection.prepare(&stmt.sql).map_err(Error::client)?;

    if !prepared.readonly() {
        return Err(Error::client_message(format!(
            "statement is not read-only; sql={}",
            stmt.sql
        )));
    }

    for (name, value) in stmt.params {
        let index = parameter_index(&prepared, &name)?;
        prepared
            .raw_bind_parameter(index, Value::from(value))
            .map_err(Error::client)?;
    }

    let columns: Arc<[String]> = prepared
        .column_names()
        .into_iter()
        .map(String::from)
        .collect();

    let mut rows = prepared.raw_query();
    let mut ret = vec![];

    while limit.map_or(true, |limit| ret.len() < limit) {
        let Some(row) = rows.next().map_err(Error::client)? else {
            break;
        };

        let values = (0..columns.len())
            .map(|index| {
                let value = row.get_ref(index).map_err(Error::client)?;
                Ok(Value::from_sql(value)?.into_inner())
            })
            .collect::<Result<Vec<_>>>()?;

        ret.push(Row::new(columns.clone(), values)?);
    }

    Ok(Response::row_stream(ret))
}

/// Binds `@name`, `:name` or `$name`, whichever the statement uses.
fn parameter_index(stmt: &rusqlite::Statement<'_>, name: &str) -> Result<usize> {
    for prefix in ["@", ":", "$"] {
        if let Some(index) = stmt
            .parameter_index(&format!("{prefix}{name}"))
            .map_err(Error::client)?
        {
            return Ok(index);
        }
    }

    Err(Error::client_message(format!(
        "statement has no parameter named `{name}`"
    )))
}

fn write(
    connection: &mut RusqliteConnection,
    behavior: TransactionBehavior,
    mutations: &[Mutation],
) -> Result<Response> {
    let tx = connection
        .transaction_with_behavior(behavior)
        .map_err(Error::client)?;

    let serializer = sql::Serializer::sqlite();
    let mut count = 0;

    // Dropping `tx` on an early return rolls the transaction back.
    for mutation in mutations {
        let key_columns = primary_key(&tx, &mutation.table)?;
        let stmt = sql::Statement::from_mutation(mutation, &key_columns)?;

        let mut params = vec![];
        let sql_str = serializer.serialize(&stmt, &mut params);

        log::trace!("sqlite write; sql={sql_str}");

        let changed = tx
            .execute(
                &sql_str,
                rusqlite::params_from_iter(params.into_iter().map(Value::from)),
            )
            .map_err(Error::client)?;

        if stmt.is_update() && changed == 0 {
            return Err(Error::client_message(format!(
                "row not found; table={}",
                mutation.table
            )));
        }

        count += changed as u64;
    }

    tx.commit().map_err(Error::client)?;

    Ok(Response::count(count))
}

/// The table's primary key columns, in key order.
fn primary_key(connection: &RusqliteConnection, table: &str) -> Result<Vec<String>> {
    let mut stmt = connection
        .prepare_cached("SELECT name, pk FROM pragma_table_info(?1)")
        .map_err(Error::client)?;

    let columns = stmt
        .query_map([table], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))
        .map_err(Error::client)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(Error::client)?;

    if columns.is_empty() {
        return Err(Error::client_message(format!("no such table: {table}")));
    }

    let mut key: Vec<_> = columns.into_iter().filter(|(_, pk)| *pk > 0).collect();
    key.sort_by_key(|(_, pk)| *pk);

    Ok(key.into_iter().map(|(name, _)| name).collect())
}
