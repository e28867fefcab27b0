use super::Error;

/// Error when the session configuration or a connection URL is invalid.
#[derive(Debug)]
pub(super) struct InvalidConfigError {
    message: Box<str>,
}

impl std::error::Error for InvalidConfigError {}

impl core::fmt::Display for InvalidConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid config: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConfig(InvalidConfigError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if the root cause is an invalid configuration error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::InvalidConfig(_))
    }
}
