use crate::{stmt::RowStream, Error, Model};

use tokio_stream::Stream;

/// Streams query rows, loading each one into `M` as it is consumed.
///
/// A cursor may be bounded: once it has yielded its limit it reports the end of
/// the stream and never pulls further rows from the backend.
pub struct Cursor<M> {
    rows: RowStream,
    remaining: Option<usize>,
    _p: std::marker::PhantomData<fn() -> M>,
}

pub trait FromCursor<A>: Extend<A> + Default {}

impl<A, T: Extend<A> + Default> FromCursor<A> for T {}

impl<M: Model> Cursor<M> {
    pub(crate) fn new(rows: RowStream, limit: Option<usize>) -> Cursor<M> {
        Cursor {
            rows,
            remaining: limit,
            _p: std::marker::PhantomData,
        }
    }

    pub async fn next(&mut self) -> Option<Result<M, Error>> {
        if self.remaining == Some(0) {
            return None;
        }

        let row = self.rows.next().await?;

        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }

        Some(row.and_then(M::load))
    }

    /// Collect all values
    pub async fn collect<B>(mut self) -> Result<B, Error>
    where
        B: FromCursor<M>,
    {
        let mut ret = B::default();

        while let Some(res) = self.next().await {
            ret.extend(Some(res?));
        }

        Ok(ret)
    }

    /// Turns the cursor into a [`Stream`].
    pub fn into_stream(self) -> impl Stream<Item = Result<M, Error>> + Send
    where
        M: Send + 'static,
    {
        let mut cursor = self;

        async_stream::stream! {
            while let Some(res) = cursor.next().await {
                yield res;
            }
        }
    }
}

impl<M> std::fmt::Debug for Cursor<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("rows", &self.rows)
            .field("remaining", &self.remaining)
            .finish()
    }
}
