mod config;
pub use config::{ClientOption, Config};

mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::async_trait;

use std::fmt::Debug;

/// A database backend.
///
/// A driver knows how to open connections; everything else goes through the
/// returned [`Connection`].
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Opens a connection for the session described by `config`.
    async fn connect(&self, config: &Config) -> crate::Result<Box<dyn Connection>>;
}

/// An open connection to a backend.
///
/// One connection is shared by every clone of a session, so implementations
/// must accept concurrent calls to [`exec`](Connection::exec).
#[async_trait]
pub trait Connection: Debug + Send + Sync + 'static {
    /// Execute a database operation
    async fn exec(&self, op: Operation) -> crate::Result<Response>;

    /// Releases the connection. Operations issued afterwards fail with a
    /// client error.
    async fn close(&self) -> crate::Result<()>;
}
