//! Result type for operations that can only fail because of a bug in ipmeta.

/// Result of an internal operation.
///
/// Problems in the user's component model never produce `Err`; they are
/// reported through the diagnostic sink and the pipeline carries on.
pub type MetaResult<T> = Result<T, InternalError>;

/// An internal error: a logic error in ipmeta, not a modelling mistake.
#[derive(Debug, thiserror::Error)]
#[error("internal error: {message}")]
pub struct InternalError {
    /// Description of what went wrong.
    pub message: String,
}

impl InternalError {
    /// Creates a new internal error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for InternalError {
    fn from(message: String) -> Self {
        Self { message }
    }
}
