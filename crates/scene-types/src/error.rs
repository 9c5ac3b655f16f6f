//! Error types for mesh record validation.

use thiserror::Error;

/// Result type for record validation.
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors raised when a mesh record violates its topology invariants.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The face vertex counts do not account for the index stream.
    #[error("mesh '{name}': face vertex counts sum to {expected} but {got} indices are present")]
    IndexCountMismatch {
        /// Name of the offending mesh.
        name: String,
        /// Sum of the face vertex counts.
        expected: u64,
        /// Number of face vertex indices actually present.
        got: usize,
    },

    /// A face vertex index points past the end of the point array.
    #[error("mesh '{name}': face vertex index {index} is out of bounds for {point_count} points")]
    IndexOutOfBounds {
        /// Name of the offending mesh.
        name: String,
        /// The out-of-range index.
        index: u32,
        /// Number of points in the mesh.
        point_count: usize,
    },
}
