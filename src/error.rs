//! Error types for shape rendering and object codecs

use thiserror::Error;

/// Result type alias for diagram operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while drawing shapes or encoding objects
#[derive(Error, Debug)]
pub enum Error {
    /// A path sink refused a drawing command
    #[error("Path sink failed: {0}")]
    Sink(String),

    /// Converting a value to or from its persisted form failed
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A record written for one type was handed to the codec of another
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// No built-in shape is registered under the given name
    #[error("Unknown shape: {0}")]
    UnknownShape(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
