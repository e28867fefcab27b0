use crate::{stmt::RowStream, Error, Result};

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Operation result, as a stream of rows
    Stream(RowStream),
}

impl Response {
    pub fn count(count: u64) -> Response {
        Response {
            rows: Rows::Count(count),
        }
    }

    pub fn row_stream(rows: impl Into<RowStream>) -> Response {
        Response {
            rows: Rows::Stream(rows.into()),
        }
    }
}

impl Rows {
    /// Copies the rows, buffering the stream if needed.
    pub async fn dup(&mut self) -> Result<Rows> {
        match self {
            Rows::Count(count) => Ok(Rows::Count(*count)),
            Rows::Stream(rows) => Ok(Rows::Stream(rows.dup().await?)),
        }
    }

    pub fn into_stream(self) -> Result<RowStream> {
        match self {
            Rows::Stream(rows) => Ok(rows),
            Rows::Count(_) => Err(Error::invalid_result("expected rows, got a row count")),
        }
    }
}
