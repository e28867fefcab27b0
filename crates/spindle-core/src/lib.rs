pub mod driver;
pub use driver::{Config, Connection, Driver};

mod error;
pub use error::{Error, IntoError};

pub mod mutation;
pub use mutation::Mutation;

pub mod stmt;

/// A Result type alias that uses Spindle's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
