use super::Error;

/// Error reported by the backend while executing an operation.
///
/// This is the catch-all for failures that happen on the other side of the
/// driver seam: constraint violations, a closed session, rejected SQL, I/O.
/// The backend error is kept as the source.
#[derive(Debug)]
pub(super) struct ClientError {
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for ClientError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Wraps a backend error as a client error.
    ///
    /// Drivers call this at the boundary for every error returned by the
    /// underlying database library.
    pub fn client(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Client(ClientError {
            inner: Box::new(err),
        }))
    }

    /// Creates a client error from a plain message.
    pub fn client_message(message: impl Into<String>) -> Error {
        Error::client(Message(message.into()))
    }

    /// Returns `true` if the root cause is a client error.
    ///
    /// A record-not-found error also counts as a client error.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.root_kind(),
            super::ErrorKind::Client(_) | super::ErrorKind::RecordNotFound(_)
        )
    }

    /// Returns `true` if this error already carries a classification, that
    /// is, it is anything other than an ad-hoc message or foreign error.
    pub fn is_classified(&self) -> bool {
        !matches!(
            self.root_kind(),
            super::ErrorKind::Adhoc(_) | super::ErrorKind::Anyhow(_) | super::ErrorKind::Unknown
        )
    }
}

#[derive(Debug)]
struct Message(String);

impl std::error::Error for Message {}

impl core::fmt::Display for Message {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
