use super::Error;

/// Error when a single-record query matches more than one row.
///
/// Callers should treat this as a conflict: the query was expected to be
/// unique and it is not.
#[derive(Debug)]
pub(super) struct TooManyRecordsError {
    context: Option<Box<str>>,
}

impl std::error::Error for TooManyRecordsError {}

impl core::fmt::Display for TooManyRecordsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("too many records")?;
        if let Some(ref ctx) = self.context {
            write!(f, ": {}", ctx)?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates a too many records error.
    pub fn too_many_records(context: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TooManyRecords(TooManyRecordsError {
            context: Some(context.into().into()),
        }))
    }

    /// Returns `true` if the root cause is a too many records error.
    pub fn is_too_many_records(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::TooManyRecords(_))
    }
}
