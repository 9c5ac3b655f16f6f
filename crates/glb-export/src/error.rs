//! Error types for GLB export.

use scene_types::RecordError;
use thiserror::Error;

/// Result type for GLB export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while encoding a GLB container.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The input sequence contains no usable mesh records.
    #[error("no mesh data to convert")]
    NoMeshData,

    /// A record failed its topology invariants.
    #[error("invalid mesh record: {0}")]
    Record(#[from] RecordError),

    /// Document serialization failed.
    #[error("document serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
