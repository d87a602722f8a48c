//! Error types for string inspection.
//!
//! Inspection itself is total: every valid codepoint classifies, renders and
//! pads to a defined result, and a string that cannot be Punycode-converted
//! is a normal outcome reported inside [`Inspection`](crate::Inspection),
//! not an error. What remains for this module is the boundary: I/O, JSON
//! encoding, and the one feature that is deliberately unfinished.
//!
//! ## Examples
//!
//! ```rust
//! use runelens::{locale_members, Error};
//!
//! // The locale-membership check is a stub and says so.
//! match locale_members("héllo", "fr") {
//!     Err(Error::NotImplemented(what)) => assert_eq!(what, "locale membership check"),
//!     other => panic!("expected NotImplemented, got {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Represents the errors an inspection run can surface to its caller.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while writing output
    #[error("IO error: {0}")]
    Io(String),

    /// JSON encoding of a report failed
    #[error("JSON encoding failed: {0}")]
    Json(String),

    /// A feature that exists as surface area but has no algorithm behind it.
    ///
    /// Callers must treat this as a failed check, never as a passed one.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    /// Generic message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an IO error from a message.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a generic error from a message.
    pub fn custom(msg: impl Into<String>) -> Self {
        Error::Message(msg.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_implemented_display() {
        let err = Error::NotImplemented("locale membership check");
        assert_eq!(err.to_string(), "locale membership check is not implemented");
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_custom_message() {
        let err = Error::custom("something odd");
        assert_eq!(err.to_string(), "something odd");
    }
}
