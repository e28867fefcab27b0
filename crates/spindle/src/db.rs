mod builder;
pub use builder::Builder;

mod connect;
pub use connect::Connect;

use crate::{
    driver::{
        operation::{Apply, BufferWrite, QuerySql},
        Connection, Operation, Response,
    },
    mutation::{self, Op},
    record,
    stmt::{RowStream, Value},
    Config, Cursor, Error, Key, Model, Mutation, Record, Result, Statement,
};

use std::sync::Arc;

/// Shared state between all `Db` clones.
pub(crate) struct Shared {
    config: Config,
    connection: Box<dyn Connection>,
}

/// A session with one database.
///
/// The session is immutable once built. Cloning is cheap and every clone
/// talks to the same connection, so one `Db` can serve many concurrent tasks.
/// Dropping an operation's future cancels it.
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    /// `projects/{project}/instances/{instance}/databases/{database}`
    pub fn database_path(&self) -> String {
        self.shared.config.database_path()
    }

    /// Runs a read-only query and loads at most `limit` records.
    ///
    /// A `limit` of zero returns no records without running the query.
    pub async fn find<M: Model>(&self, stmt: impl Into<Statement>, limit: usize) -> Result<Vec<M>> {
        let stmt = stmt.into();

        if limit == 0 {
            return Ok(vec![]);
        }

        self.query::<M>(stmt, Some(limit)).await?.collect().await
    }

    /// Runs a read-only query that must match exactly one row.
    ///
    /// No row is a [not found](Error::is_not_found) error. A second row is a
    /// [too many records](Error::is_too_many_records) error; the query is
    /// expected to be unique, so the first row is not returned either.
    pub async fn find_one<M: Model>(&self, stmt: impl Into<Statement>) -> Result<M> {
        let stmt = stmt.into();
        let sql = stmt.sql.clone();

        let mut rows = self.rows(stmt, Some(2)).await?;

        let Some(first) = rows.next().await.transpose()? else {
            return Err(Error::record_not_found(format!("data not found; sql={sql}")));
        };

        if rows.next().await.transpose()?.is_some() {
            return Err(Error::too_many_records(format!(
                "multiple data found; sql={sql}"
            )));
        }

        M::load(first)
    }

    /// Runs a read-only query and streams every matching record.
    pub async fn all<M: Model>(&self, stmt: impl Into<Statement>) -> Result<Cursor<M>> {
        self.query(stmt.into(), None).await
    }

    /// Inserts `record` into `table`. Fails if a row with the same key exists.
    pub async fn insert(&self, table: &str, record: impl Record) -> Result<()> {
        let (columns, values) = record::extract(&record)?;
        self.write_values(table, Op::Insert, columns, values).await
    }

    /// Overwrites the row with the record's key. Fails if no such row exists.
    pub async fn update(&self, table: &str, record: impl Record) -> Result<()> {
        let (columns, values) = record::extract(&record)?;
        self.write_values(table, Op::Update, columns, values).await
    }

    /// Updates only `columns` of the row with the record's key.
    ///
    /// `columns` must include the key columns.
    pub async fn update_columns(
        &self,
        table: &str,
        record: impl Record,
        columns: &[&str],
    ) -> Result<()> {
        let columns: Vec<String> = columns.iter().map(|column| column.to_string()).collect();
        let values = record.values(&columns)?;

        self.write_values(table, Op::Update, columns, values).await
    }

    /// Inserts `record`, or overwrites its columns if the key exists.
    pub async fn insert_or_update(&self, table: &str, record: impl Record) -> Result<()> {
        let (columns, values) = record::extract(&record)?;
        self.write_values(table, Op::InsertOrUpdate, columns, values).await
    }

    /// Applies mutations atomically.
    pub async fn apply(&self, mutations: Vec<Mutation>) -> Result<()> {
        if mutations.is_empty() {
            return Ok(());
        }

        self.exec(Apply { mutations }.into()).await?;
        Ok(())
    }

    /// Deletes the row with `key`. Deleting a missing row succeeds.
    pub async fn delete(&self, table: &str, key: impl Into<Key>) -> Result<()> {
        self.apply(vec![Mutation::delete(table, key)]).await
    }

    /// Deletes every listed row in one atomic apply.
    pub async fn delete_multi<K: Into<Key>>(
        &self,
        table: &str,
        keys: impl IntoIterator<Item = K>,
    ) -> Result<()> {
        self.apply(mutation::delete_many(table, keys)).await
    }

    /// Deletes every row of each table inside one read-write transaction.
    pub async fn truncate<T: Into<String>>(&self, tables: impl IntoIterator<Item = T>) -> Result<()> {
        let mutations = mutation::truncate(tables);

        if mutations.is_empty() {
            return Ok(());
        }

        self.exec(BufferWrite { mutations }.into()).await?;
        Ok(())
    }

    /// Closes the session. Operations issued afterwards, from this or any
    /// clone, fail with a client error.
    pub async fn close(&self) -> Result<()> {
        log::debug!("closing session; database={}", self.database_path());
        self.shared.connection.close().await.map_err(classify)
    }

    async fn write_values(
        &self,
        table: &str,
        op: Op,
        columns: Vec<String>,
        values: Vec<Value>,
    ) -> Result<()> {
        if columns.is_empty() {
            return Err(Error::invalid_struct(format!(
                "record for `{table}` has no columns"
            )));
        }

        self.apply(vec![Mutation::write(table, op, columns, values)?])
            .await
    }

    async fn query<M: Model>(&self, stmt: Statement, limit: Option<usize>) -> Result<Cursor<M>> {
        let rows = self.rows(stmt, limit).await?;
        Ok(Cursor::new(rows, limit))
    }

    async fn rows(&self, stmt: Statement, limit: Option<usize>) -> Result<RowStream> {
        let response = self.exec(QuerySql { stmt, limit }.into()).await?;
        response.rows.into_stream()
    }

    async fn exec(&self, op: Operation) -> Result<Response> {
        log::debug!("exec; op={}", op.name());

        self.shared.connection.exec(op).await.map_err(classify)
    }
}

/// Backend errors that carry no classification become client errors, keeping
/// the original as the source.
fn classify(err: Error) -> Error {
    if err.is_classified() {
        err
    } else {
        Error::client(err)
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("config", &self.shared.config)
            .field("connection", &self.shared.connection)
            .finish()
    }
}
