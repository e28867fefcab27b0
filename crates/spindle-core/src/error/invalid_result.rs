use super::Error;

/// Error when a row does not have the shape a model expects.
///
/// This occurs when:
/// - The row lacks a column the model loads
/// - The backend answers a query with something other than rows
#[derive(Debug)]
pub(super) struct InvalidResultError {
    message: Box<str>,
}

impl std::error::Error for InvalidResultError {}

impl core::fmt::Display for InvalidResultError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid result: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid result error.
    pub fn invalid_result(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidResult(InvalidResultError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if the root cause is an invalid result error.
    pub fn is_invalid_result(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::InvalidResult(_))
    }
}
