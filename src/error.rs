use crate::{codec::DataType, key::RowKey};

/// Error returned by the codec and by opt-in range validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The scalar type has no codec mapping.
    #[error("unsupported scalar type: {data_type}")]
    UnsupportedType {
        /// Requested type.
        data_type: DataType,
    },
    /// Input length (or content) does not fit the fixed-width layout of the type.
    #[error("malformed {data_type} cell: expected {expected} bytes, got {actual}")]
    MalformedInput {
        /// Requested type.
        data_type: DataType,
        /// Width the layout requires.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
    /// The value handed to `encode` is not of the requested type.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Requested type.
        expected: DataType,
        /// Type of the supplied value.
        actual: DataType,
    },
    /// Explicit bounds that cannot hold any key.
    #[error("invalid row range: start {start} is past end {end}")]
    InvalidRange {
        /// Lower bound key.
        start: RowKey,
        /// Upper bound key.
        end: RowKey,
    },
}

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
