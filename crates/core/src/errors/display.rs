//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage { operation, message } => {
                write!(f, "invalid use of '{operation}': {message}")
            }
            Error::Configuration { message } => {
                write!(f, "configuration error: {message}")
            }
            Error::CycleDetected { path } => {
                write!(f, "cyclic reference detected at '{path}'")
            }
            Error::Uncloneable { kind, path } => {
                write!(f, "cannot clone {kind} value at '{path}'")
            }
            Error::DepthExceeded { path, limit } => {
                write!(f, "nesting at '{path}' exceeds the depth limit of {limit}")
            }
            Error::Json { message, .. } => {
                write!(f, "JSON error: {message}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::usage("Chain::new", "at least one stage is required");
        assert_eq!(
            err.to_string(),
            "invalid use of 'Chain::new': at least one stage is required"
        );

        let err = Error::cycle_detected("$.a[0]");
        assert_eq!(err.to_string(), "cyclic reference detected at '$.a[0]'");

        let err = Error::depth_exceeded("$.x", 4);
        assert!(err.to_string().contains("depth limit of 4"));
    }
}
