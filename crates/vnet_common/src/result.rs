//! Result and error types for structural-invariant violations.

/// The result type of operations that can detect a broken netlist invariant.
///
/// `Err` always means the producer of the design (elaboration) built something
/// that violates the IR contract. It is a compiler bug, not a user error, and
/// the driver should abort the current invocation with the message.
pub type VnetResult<T> = Result<T, InternalError>;

/// An internal compiler error raised when a netlist invariant does not hold.
#[derive(Debug, thiserror::Error)]
#[error("internal compiler error: {message}")]
pub struct InternalError {
    /// Description of the violated invariant.
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
