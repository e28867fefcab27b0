use super::Error;

/// Error when a record cannot be turned into columns and values.
///
/// Raised before anything reaches the backend, e.g. when a dynamic record is
/// not an object, a field holds a nested value, or a requested column has no
/// matching field.
#[derive(Debug)]
pub(super) struct InvalidStructError {
    message: Box<str>,
}

impl std::error::Error for InvalidStructError {}

impl core::fmt::Display for InvalidStructError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid struct: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid struct error.
    pub fn invalid_struct(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidStruct(InvalidStructError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if the root cause is an invalid struct error.
    pub fn is_invalid_struct(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::InvalidStruct(_))
    }
}
