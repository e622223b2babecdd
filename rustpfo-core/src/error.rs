//! Error types for rustpfo-core.

use thiserror::Error;

use crate::record::RecordKind;

/// Result type alias for rustpfo operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for rustpfo operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The named collection does not exist in the current event.
    #[error("collection '{name}' is not available in this event")]
    CollectionNotFound {
        /// The requested collection name.
        name: String,
    },

    /// A collection with this name already exists in the event.
    #[error("collection '{name}' already exists in this event")]
    DuplicateCollection {
        /// The duplicated collection name.
        name: String,
    },

    /// A collection element is not of the expected record kind.
    #[error("collection '{collection}' element {index}: expected {expected}, found {found}")]
    RecordKindMismatch {
        /// The collection being read.
        collection: String,
        /// Index of the offending element.
        index: usize,
        /// The kind the reader expected.
        expected: RecordKind,
        /// The kind actually stored.
        found: RecordKind,
    },

    /// A parameter name that was never registered.
    #[error("unknown parameter: {name}")]
    UnknownParameter {
        /// The requested parameter name.
        name: String,
    },

    /// A parameter value of the wrong type.
    #[error("parameter '{name}' expects a {expected} value")]
    ParameterTypeMismatch {
        /// The parameter name.
        name: String,
        /// Name of the expected value type.
        expected: &'static str,
    },

    /// A processor name that was never registered.
    #[error("unknown processor: {name}")]
    UnknownProcessor {
        /// The requested processor name.
        name: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
