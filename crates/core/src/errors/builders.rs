//! Builder methods for creating errors with context

use super::types::Error;

impl Error {
    /// Create a usage error for `operation`
    #[must_use]
    pub fn usage(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Usage {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a cycle error at `path`
    #[must_use]
    pub fn cycle_detected(path: impl Into<String>) -> Self {
        Error::CycleDetected { path: path.into() }
    }

    /// Create an error for a value kind the cloner refuses to copy
    #[must_use]
    pub fn uncloneable(kind: impl Into<String>, path: impl Into<String>) -> Self {
        Error::Uncloneable {
            kind: kind.into(),
            path: path.into(),
        }
    }

    /// Create a recursion limit error
    #[must_use]
    pub fn depth_exceeded(path: impl Into<String>, limit: usize) -> Self {
        Error::DepthExceeded {
            path: path.into(),
            limit,
        }
    }

    /// Whether this error was raised because of how an API was called
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage { .. })
    }
}
