//! Core error type definitions

/// Result type alias for fnkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fnkit operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An API was called in a way it does not support
    Usage { operation: String, message: String },

    /// Configuration errors
    Configuration { message: String },

    /// A list or record was reached again while it was still being cloned
    CycleDetected { path: String },

    /// A value kind that cannot be copied under the active clone policy
    Uncloneable { kind: String, path: String },

    /// Recursion went deeper than the configured limit
    DepthExceeded { path: String, limit: usize },

    /// JSON serialization/deserialization errors
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}
